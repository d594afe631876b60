//! Configuration for the distance engine.
//!
//! The chunk size is the only runtime tunable. The text-file rule is fixed at
//! compile time.

/// Default chunk size for streaming binary comparison (100 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 104_857_600;

/// Extension (without the dot, compared case-insensitively) that marks a
/// file as text, to be read wholly into memory.
pub const TEXT_EXTENSION: &str = "txt";

/// Engine options.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct EngineConfig {
    /// Maximum number of bytes read from each file per streaming iteration
    /// (default: 100 MiB).
    ///
    /// Peak buffer memory of a binary comparison is bounded by twice this value.
    /// A value of `0` is treated as `1`.
    pub chunk_size: usize,
}

impl EngineConfig {
    /// Config with a custom chunk size.
    #[must_use]
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Chunk size actually used by the streaming loop.
    #[must_use]
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.max(1)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chunk_size_is_100_mib() {
        assert_eq!(EngineConfig::default().chunk_size, 100 * 1024 * 1024);
    }

    #[test]
    fn test_zero_chunk_size_is_clamped() {
        assert_eq!(EngineConfig::with_chunk_size(0).effective_chunk_size(), 1);
        assert_eq!(EngineConfig::with_chunk_size(7).effective_chunk_size(), 7);
    }
}
