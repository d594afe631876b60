//! Predicate checks over raw inputs.
//!
//! Every check that can fail returns the [`Rejection`] explaining why, so
//! callers never have to read back a status recorded elsewhere.

use std::path::Path;

use crate::config::TEXT_EXTENSION;
use crate::error::Rejection;

/// Ok iff `path` names an existing regular file.
///
/// # Errors
///
/// Returns [`Rejection::FileNotFound`] if the path is missing or is not a
/// regular file (directories do not count).
pub fn exists_as_file(path: &Path) -> Result<(), Rejection> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Rejection::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Ok iff `text` is not a rooted filesystem path.
///
/// Relative paths are literals: only rooted inputs are taken to refer to files.
///
/// # Errors
///
/// Returns [`Rejection::StringIsPath`] if `text` is rooted.
pub fn is_literal(text: &str) -> Result<(), Rejection> {
    let path = Path::new(text);
    if path.has_root() {
        Err(Rejection::StringIsPath {
            path: path.to_path_buf(),
        })
    } else {
        Ok(())
    }
}

/// Whether the path carries the text extension (case-insensitive).
#[must_use]
pub fn has_text_extension(path: &Path) -> bool {
    has_extension(path, TEXT_EXTENSION)
}

/// Whether the path's extension equals `extension` (no leading dot),
/// ignoring ASCII case.
#[must_use]
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

/// Ok iff both byte sequences have the same element count.
///
/// # Errors
///
/// Returns [`Rejection::UnequalLength`] on mismatch.
pub fn same_length_bytes(a: &[u8], b: &[u8]) -> Result<(), Rejection> {
    check_lengths(a.len() as u64, b.len() as u64)
}

/// Ok iff both strings have the same character count.
///
/// # Errors
///
/// Returns [`Rejection::UnequalLength`] on mismatch.
pub fn same_length_text(a: &str, b: &str) -> Result<(), Rejection> {
    check_lengths(a.chars().count() as u64, b.chars().count() as u64)
}

/// Ok with the shared size iff both files have the same size in bytes.
///
/// # Errors
///
/// Returns [`Rejection::UnequalLength`] on mismatch, or
/// [`Rejection::FileNotFound`] if a file's metadata can no longer be read.
pub fn same_file_length(a: &Path, b: &Path) -> Result<u64, Rejection> {
    let left = file_length(a)?;
    let right = file_length(b)?;
    check_lengths(left, right).map(|()| left)
}

fn file_length(path: &Path) -> Result<u64, Rejection> {
    std::fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| {
            tracing::debug!(path = %path.display(), error = %e, "size query failed");
            Rejection::FileNotFound {
                path: path.to_path_buf(),
            }
        })
}

fn check_lengths(left: u64, right: u64) -> Result<(), Rejection> {
    if left == right {
        Ok(())
    } else {
        Err(Rejection::UnequalLength { left, right })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_same_length_bytes() {
        assert!(same_length_bytes(&[], &[]).is_ok());
        assert!(same_length_bytes(&[0, 1, 2, 3, 4], &[0x00, 0x01, 0x02, 0x03, 0x04]).is_ok());
        assert_eq!(
            same_length_bytes(&[0, 1, 2, 3, 4], &[0, 1, 2, 3]),
            Err(Rejection::UnequalLength { left: 5, right: 4 })
        );
    }

    #[test]
    fn test_plain_strings_are_literals() {
        assert!(is_literal("01010101010101").is_ok());
        assert!(is_literal("ABCDEFGHIJ").is_ok());
        assert!(is_literal("relative/looking/path.txt").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_rooted_path_is_not_literal() {
        let err = is_literal("/tmp/Text1.txt").unwrap_err();
        assert_eq!(err.status(), crate::ComparisonStatus::StringIsPath);
    }

    #[test]
    fn test_text_extension_is_case_insensitive() {
        assert!(has_text_extension(Path::new("/tmp/Text1.txt")));
        assert!(has_text_extension(Path::new("/tmp/Text4.TXT")));
        assert!(!has_text_extension(Path::new("/tmp/Data.zip")));
        assert!(!has_text_extension(Path::new("/tmp/txt")));
        assert!(!has_text_extension(Path::new("/tmp/archive.txt.gz")));
    }

    #[test]
    fn test_exists_as_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("Text1.txt");
        fs::write(&file, "hello").unwrap();

        assert!(exists_as_file(&file).is_ok());
        assert_eq!(
            exists_as_file(&tmp.path().join("Text5.txt")),
            Err(Rejection::FileNotFound {
                path: tmp.path().join("Text5.txt")
            })
        );
        // a directory is not a file
        assert!(exists_as_file(tmp.path()).is_err());
    }

    #[test]
    fn test_same_length_text_counts_characters() {
        assert!(same_length_text("QWERTYUIOP", "POIUYTREWQ").is_ok());
        assert_eq!(
            same_length_text("QWERTYUIOP", "POIUYTREWQ!"),
            Err(Rejection::UnequalLength {
                left: 10,
                right: 11
            })
        );
        // two characters each, even though the UTF-8 byte counts differ
        assert!(same_length_text("\u{e9}a", "ab").is_ok());
    }

    #[test]
    fn test_same_file_length() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("Data.zip");
        let b = tmp.path().join("Data2.zip");
        let c = tmp.path().join("Data3.zip");
        fs::write(&a, [1u8, 2, 3]).unwrap();
        fs::write(&b, [3u8, 2, 1]).unwrap();
        fs::write(&c, [1u8, 2]).unwrap();

        assert_eq!(same_file_length(&a, &b), Ok(3));
        assert_eq!(
            same_file_length(&a, &c),
            Err(Rejection::UnequalLength { left: 3, right: 2 })
        );
        assert!(matches!(
            same_file_length(&a, &tmp.path().join("gone.zip")),
            Err(Rejection::FileNotFound { .. })
        ));
    }
}
