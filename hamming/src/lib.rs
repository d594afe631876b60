//! # hamming
//!
//! Hamming distance between two equal-length sources.
//!
//! A source is a plain string. The pair is classified before anything is
//! compared:
//!
//! - two non-rooted strings are **literals**, compared one byte per character;
//! - two rooted paths to existing `.txt` files are **text files**, read into memory;
//! - two rooted paths to any other existing files are **binary files**, streamed
//!   in bounded chunks so arbitrarily large files never sit wholly in memory.
//!
//! Anything else (missing files, mixed kinds, unequal lengths, empty input) is
//! refused with a [`ComparisonStatus`] instead of a distance.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hamming::{DistanceEngine, EngineConfig, SourceDescriptor};
//!
//! let engine = DistanceEngine::new(EngineConfig::with_chunk_size(16 * 1024 * 1024));
//! let result = engine
//!     .compute(
//!         &SourceDescriptor::from("/data/disk-a.img"),
//!         &SourceDescriptor::from("/data/disk-b.img"),
//!     )
//!     .unwrap();
//! if result.is_ok() {
//!     println!("distance: {}", result.raw_distance());
//! } else {
//!     println!("not compared: {}", result.status);
//! }
//! ```

mod classifier;
mod config;
mod engine;
mod error;
pub mod output;
mod report;
mod source;
mod strategy;
pub mod validator;

pub use classifier::Classifier;
pub use config::{DEFAULT_CHUNK_SIZE, EngineConfig, TEXT_EXTENSION};
pub use engine::DistanceEngine;
pub use error::{ComparisonStatus, DistanceError, Rejection};
pub use report::{ComparisonResult, INVALID_DISTANCE};
pub use source::{SourceDescriptor, SourceKind};
pub use strategy::count_differences;
pub use strategy::memory::encode_literal;

/// Compute the distance between two raw sources with the default engine.
///
/// An empty string stands for an absent source.
///
/// # Errors
///
/// Returns [`DistanceError`] if a validated file cannot be read to the end.
pub fn compute_distance(first: &str, second: &str) -> Result<ComparisonResult, DistanceError> {
    DistanceEngine::default().compute(
        &SourceDescriptor::from(first),
        &SourceDescriptor::from(second),
    )
}
