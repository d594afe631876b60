//! Status and error types for distance computation.
//!
//! Two tiers:
//! - [`Rejection`]: an expected, caller-recoverable reason why a pair of sources
//!   cannot be compared. Surfaced as a [`ComparisonStatus`] on the result.
//! - [`DistanceError`]: a fatal I/O fault discovered while reading sources that
//!   were already validated. Surfaced as `Err`.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Outcome code attached to every comparison.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonStatus {
    /// The distance was computed.
    #[default]
    Ok,
    /// One or both sources were missing or empty.
    InsufficientSource,
    /// The sources have different lengths.
    UnequalLength,
    /// A path-shaped source does not name an existing file.
    FileNotFound,
    /// A source expected to be a literal is a rooted filesystem path.
    StringIsPath,
    /// The sources do not resolve to the same kind.
    Unidentified,
}

impl ComparisonStatus {
    /// Whether the distance was computed.
    #[must_use]
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::InsufficientSource => "Insufficient source(s)",
            Self::UnequalLength => "Unequal length found",
            Self::FileNotFound => "File not found",
            Self::StringIsPath => "String is path",
            Self::Unidentified => "Unidentified source",
        }
    }
}

impl fmt::Display for ComparisonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Why a pair of sources was refused before a distance could be computed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Rejection {
    /// One or both sources are empty.
    #[error("Insufficient source(s)")]
    InsufficientSource,

    /// The source is a rooted path and cannot be treated as a literal.
    #[error("String is path: {}", path.display())]
    StringIsPath {
        /// The offending source.
        path: PathBuf,
    },

    /// The source does not name an existing regular file.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The sources have different lengths (characters, bytes or file size).
    #[error("Unequal length found: {left} vs {right}")]
    UnequalLength {
        /// Length of the first source.
        left: u64,
        /// Length of the second source.
        right: u64,
    },

    /// The sources resolve to different kinds (e.g. a literal and a file).
    #[error("Unidentified source: inputs are not of the same kind")]
    Unidentified,
}

impl Rejection {
    /// The status code reported for this rejection.
    #[must_use]
    pub fn status(&self) -> ComparisonStatus {
        match self {
            Self::InsufficientSource => ComparisonStatus::InsufficientSource,
            Self::StringIsPath { .. } => ComparisonStatus::StringIsPath,
            Self::FileNotFound { .. } => ComparisonStatus::FileNotFound,
            Self::UnequalLength { .. } => ComparisonStatus::UnequalLength,
            Self::Unidentified => ComparisonStatus::Unidentified,
        }
    }
}

/// Fatal failure while reading a validated source.
///
/// No partial distance is ever returned alongside this error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DistanceError {
    /// Opening or reading a file failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file yielded fewer bytes than its verified size announced.
    #[error(
        "File {} ended early at offset {offset}: expected {expected} bytes, got {actual}",
        path.display()
    )]
    Truncated {
        /// The file that shrank.
        path: PathBuf,
        /// Offset of the chunk that came up short.
        offset: u64,
        /// Bytes requested for the chunk.
        expected: usize,
        /// Bytes actually read.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_maps_to_status() {
        assert_eq!(
            Rejection::InsufficientSource.status(),
            ComparisonStatus::InsufficientSource
        );
        assert_eq!(
            Rejection::StringIsPath {
                path: PathBuf::from("/tmp/a")
            }
            .status(),
            ComparisonStatus::StringIsPath
        );
        assert_eq!(
            Rejection::FileNotFound {
                path: PathBuf::from("/tmp/a")
            }
            .status(),
            ComparisonStatus::FileNotFound
        );
        assert_eq!(
            Rejection::UnequalLength { left: 1, right: 2 }.status(),
            ComparisonStatus::UnequalLength
        );
        assert_eq!(
            Rejection::Unidentified.status(),
            ComparisonStatus::Unidentified
        );
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(ComparisonStatus::Ok.to_string(), "OK");
        assert_eq!(
            ComparisonStatus::InsufficientSource.to_string(),
            "Insufficient source(s)"
        );
        assert_eq!(
            ComparisonStatus::UnequalLength.to_string(),
            "Unequal length found"
        );
        assert_eq!(ComparisonStatus::FileNotFound.to_string(), "File not found");
        assert_eq!(ComparisonStatus::StringIsPath.to_string(), "String is path");
        assert!(ComparisonStatus::Ok.is_ok());
        assert!(!ComparisonStatus::Unidentified.is_ok());
    }

    #[test]
    fn test_truncated_message_names_file_and_offset() {
        let err = DistanceError::Truncated {
            path: PathBuf::from("/data/a.bin"),
            offset: 4096,
            expected: 1024,
            actual: 12,
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/a.bin"), "got: {msg}");
        assert!(msg.contains("offset 4096"), "got: {msg}");
        assert!(msg.contains("got 12"), "got: {msg}");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ComparisonStatus::UnequalLength).unwrap_or_default();
        assert_eq!(json, "\"unequal_length\"");
    }
}
