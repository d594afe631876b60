//! Comparison result type.

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::error::{ComparisonStatus, Rejection};
use crate::source::SourceKind;

/// Distance reported when none was computed.
pub const INVALID_DISTANCE: i64 = -1;

/// Outcome of one distance computation.
///
/// `distance` is `Some` exactly when `status` is [`ComparisonStatus::Ok`].
/// In JSON the missing distance is written as `-1`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ComparisonResult {
    /// Number of differing positions, if computed.
    #[serde(serialize_with = "serialize_distance")]
    pub distance: Option<u64>,
    /// Wall time spent classifying and comparing. Zero for sources rejected
    /// before timing started.
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_elapsed")]
    pub elapsed: Duration,
    /// Why the distance was or was not computed.
    pub status: ComparisonStatus,
    /// Kind the sources resolved to.
    pub kind: SourceKind,
}

impl ComparisonResult {
    /// A successful comparison.
    #[must_use]
    pub fn computed(distance: u64, kind: SourceKind, elapsed: Duration) -> Self {
        Self {
            distance: Some(distance),
            elapsed,
            status: ComparisonStatus::Ok,
            kind,
        }
    }

    /// A comparison refused for `rejection`.
    #[must_use]
    pub fn rejected(rejection: &Rejection, kind: SourceKind, elapsed: Duration) -> Self {
        Self {
            distance: None,
            elapsed,
            status: rejection.status(),
            kind,
        }
    }

    /// Whether the distance was computed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    /// The distance, or [`INVALID_DISTANCE`] when none was computed.
    #[must_use]
    pub fn raw_distance(&self) -> i64 {
        self.distance
            .map_or(INVALID_DISTANCE, |d| i64::try_from(d).unwrap_or(i64::MAX))
    }
}

#[allow(clippy::ref_option)]
fn serialize_distance<S: Serializer>(distance: &Option<u64>, s: S) -> Result<S::Ok, S::Error> {
    match distance {
        Some(d) => s.serialize_u64(*d),
        None => s.serialize_i64(INVALID_DISTANCE),
    }
}

fn serialize_elapsed<S: Serializer>(elapsed: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(elapsed.as_secs_f64())
}
