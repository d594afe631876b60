//! The distance engine: classify, dispatch, time.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::classifier::Classifier;
use crate::config::EngineConfig;
use crate::error::{DistanceError, Rejection};
use crate::report::ComparisonResult;
use crate::source::{SourceDescriptor, SourceKind};
use crate::strategy::{count_differences, memory, stream};
use crate::validator;

/// Result of a single strategy: a distance, or the reason the pair was refused.
type Outcome = Result<u64, Rejection>;

/// Computes Hamming distances between pairs of sources.
///
/// Holds only immutable configuration, so one engine can serve any number of
/// calls, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct DistanceEngine {
    classifier: Classifier,
    config: EngineConfig,
}

impl DistanceEngine {
    /// Engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            classifier: Classifier::new(),
            config,
        }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the distance between two sources.
    ///
    /// An empty source is rejected with `InsufficientSource` before the
    /// filesystem is touched. Every other refusal (path problems, mixed kinds,
    /// unequal lengths) is also reported through the result's status.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError`] only when a file that passed validation cannot
    /// be read to the end. No partial distance is returned in that case.
    pub fn compute(
        &self,
        first: &SourceDescriptor,
        second: &SourceDescriptor,
    ) -> Result<ComparisonResult, DistanceError> {
        if first.is_empty() || second.is_empty() {
            tracing::debug!("insufficient sources, skipping classification");
            return Ok(ComparisonResult::rejected(
                &Rejection::InsufficientSource,
                SourceKind::Unidentified,
                Duration::ZERO,
            ));
        }

        let start = Instant::now();
        let (kind, outcome) = match self.classifier.classify(first, second) {
            Ok(kind) => (kind, self.dispatch(kind, first, second)?),
            Err(rejection) => (SourceKind::Unidentified, Err(rejection)),
        };
        let elapsed = start.elapsed();

        let result = match outcome {
            Ok(distance) => {
                tracing::info!(%kind, distance, ?elapsed, "distance computed");
                ComparisonResult::computed(distance, kind, elapsed)
            }
            Err(rejection) => {
                tracing::info!(%kind, %rejection, "comparison refused");
                ComparisonResult::rejected(&rejection, kind, elapsed)
            }
        };
        Ok(result)
    }

    fn dispatch(
        &self,
        kind: SourceKind,
        first: &SourceDescriptor,
        second: &SourceDescriptor,
    ) -> Result<Outcome, DistanceError> {
        tracing::debug!(%kind, "dispatching comparison");
        match kind {
            SourceKind::Literal => Ok(compare_literals(first.as_str(), second.as_str())),
            SourceKind::TextFile => compare_text_files(first.as_path(), second.as_path()),
            SourceKind::BinaryFile => self.compare_binary_files(first.as_path(), second.as_path()),
            SourceKind::Unidentified => Ok(Err(Rejection::Unidentified)),
        }
    }

    fn compare_binary_files(&self, first: &Path, second: &Path) -> Result<Outcome, DistanceError> {
        let total = match validator::same_file_length(first, second) {
            Ok(total) => total,
            Err(rejection) => return Ok(Err(rejection)),
        };
        let chunk_size = self.config.effective_chunk_size();
        tracing::debug!(total, chunk_size, "streaming binary comparison");
        stream::compare_files(first, second, total, chunk_size).map(Ok)
    }
}

fn compare_literals(first: &str, second: &str) -> Outcome {
    validator::same_length_text(first, second)?;
    count_differences(&memory::encode_literal(first), &memory::encode_literal(second))
}

fn compare_text_files(first: &Path, second: &Path) -> Result<Outcome, DistanceError> {
    let total = match validator::same_file_length(first, second) {
        Ok(total) => total,
        Err(rejection) => return Ok(Err(rejection)),
    };
    let first_bytes = memory::read_whole(first, total)?;
    let second_bytes = memory::read_whole(second, total)?;
    Ok(count_differences(&first_bytes, &second_bytes))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ComparisonStatus;

    fn compute(a: &str, b: &str) -> ComparisonResult {
        DistanceEngine::default()
            .compute(&SourceDescriptor::from(a), &SourceDescriptor::from(b))
            .unwrap()
    }

    #[test]
    fn test_identical_literals() {
        let result = compute("abcdwxyz", "abcdwxyz");
        assert_eq!(result.distance, Some(0));
        assert_eq!(result.status, ComparisonStatus::Ok);
        assert_eq!(result.kind, SourceKind::Literal);
    }

    #[test]
    fn test_differing_literals() {
        let result = compute("abcdefgh", "abcdefff");
        assert_eq!(result.distance, Some(2));
        assert!(result.is_ok());
    }

    #[test]
    fn test_unequal_literals() {
        let result = compute("abcdwxyz", "abcd");
        assert_eq!(result.raw_distance(), -1);
        assert_eq!(result.status, ComparisonStatus::UnequalLength);
        assert_eq!(result.kind, SourceKind::Literal);
    }

    #[test]
    fn test_empty_source_is_insufficient() {
        for (a, b) in [("", "abc"), ("abc", ""), ("", "")] {
            let result = compute(a, b);
            assert_eq!(result.status, ComparisonStatus::InsufficientSource);
            assert_eq!(result.distance, None);
            assert_eq!(result.elapsed, Duration::ZERO);
        }
    }

    #[test]
    fn test_non_ascii_literals_compare_per_character() {
        // both non-ASCII characters encode to '?', so only 'x'/'y' differ
        let result = compute("\u{e9}x", "\u{e8}y");
        assert_eq!(result.distance, Some(1));
    }
}
