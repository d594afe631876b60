//! Output formatting for comparison results.
//!
//! Provides JSON and plain-text formatters for `ComparisonResult`.
//! Color/terminal formatting is excluded from this module; that concern
//! belongs to the CLI layer.

use std::io::Write;

use crate::report::ComparisonResult;

/// Format a `ComparisonResult` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(result: &ComparisonResult, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ComparisonResult` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(result: &ComparisonResult, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer, "  Source kind    : {}", result.kind)?;
    if let Some(distance) = result.distance {
        writeln!(writer, "  Distance is    : {distance}")?;
        writeln!(writer, "  Calc. time is  : {:?}", result.elapsed)?;
    } else {
        writeln!(writer, "  Get Hamming Distance Failed!")?;
        writeln!(writer, "  Source status  : {}", result.status)?;
    }
    Ok(())
}
