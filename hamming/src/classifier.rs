//! Pairwise source classification.

use std::path::Path;

use crate::config::TEXT_EXTENSION;
use crate::error::Rejection;
use crate::source::{SourceDescriptor, SourceKind};
use crate::validator;

/// Resolves a pair of descriptors to a common [`SourceKind`].
///
/// Decision order, first match wins:
/// 1. both literals (not rooted paths) → [`SourceKind::Literal`];
/// 2. both rooted: each must be an existing file, then both `.txt` →
///    [`SourceKind::TextFile`], otherwise [`SourceKind::BinaryFile`];
/// 3. one literal, one rooted path → rejected.
#[derive(Debug, Clone)]
pub struct Classifier {
    text_extension: &'static str,
}

impl Classifier {
    /// Classifier using the default text extension.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text_extension: TEXT_EXTENSION,
        }
    }

    /// Classify the pair.
    ///
    /// # Errors
    ///
    /// The pair is unidentified; the [`Rejection`] carries the reason:
    /// - [`Rejection::FileNotFound`] if both are rooted but one is not an existing file;
    /// - [`Rejection::StringIsPath`] if one is a literal and the other a rooted path
    ///   that does not exist;
    /// - [`Rejection::Unidentified`] if one is a literal and the other an existing file.
    pub fn classify(
        &self,
        first: &SourceDescriptor,
        second: &SourceDescriptor,
    ) -> Result<SourceKind, Rejection> {
        let kind = match (
            validator::is_literal(first.as_str()),
            validator::is_literal(second.as_str()),
        ) {
            (Ok(()), Ok(())) => SourceKind::Literal,
            (Err(_), Err(_)) => self.classify_files(first.as_path(), second.as_path())?,
            (Ok(()), Err(rejection)) => return Err(mixed(second.as_path(), rejection)),
            (Err(rejection), Ok(())) => return Err(mixed(first.as_path(), rejection)),
        };
        tracing::debug!(first = %first, second = %second, %kind, "classified sources");
        Ok(kind)
    }

    fn classify_files(&self, first: &Path, second: &Path) -> Result<SourceKind, Rejection> {
        validator::exists_as_file(first)?;
        validator::exists_as_file(second)?;

        if validator::has_extension(first, self.text_extension)
            && validator::has_extension(second, self.text_extension)
        {
            Ok(SourceKind::TextFile)
        } else {
            Ok(SourceKind::BinaryFile)
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Reason for a literal paired with a rooted path: the path's own rejection
/// when it does not name a file, `Unidentified` when it does.
fn mixed(path: &Path, path_rejection: Rejection) -> Rejection {
    match validator::exists_as_file(path) {
        Ok(()) => Rejection::Unidentified,
        Err(_) => path_rejection,
    }
}
