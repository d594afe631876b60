//! Source descriptors and the kinds a pair of them can resolve to.

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// A raw input: either inline text or a filesystem path.
///
/// Callers do not say which; the [`Classifier`](crate::Classifier) decides
/// from the pair. An empty descriptor stands for an absent source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SourceDescriptor(String);

impl SourceDescriptor {
    /// Wrap a raw input string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw string as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The raw string viewed as a path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Whether the descriptor carries no input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SourceDescriptor {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for SourceDescriptor {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a pair of descriptors resolved to. Both members of a pair always
/// share one kind.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Inline text, compared one byte per character.
    Literal,
    /// Existing `.txt` files, read wholly into memory.
    TextFile,
    /// Any other existing files, compared chunk by chunk.
    BinaryFile,
    /// The pair could not be resolved to a common kind.
    Unidentified,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Literal => "literal",
            Self::TextFile => "text file",
            Self::BinaryFile => "binary file",
            Self::Unidentified => "unidentified",
        };
        f.write_str(name)
    }
}
