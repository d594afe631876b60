//! Diagnostic logging setup.
//!
//! Verbosity follows the `-v` count: 0 → warn, 1 → info, 2 → debug, 3+ → trace.
//! `RUST_LOG`, when set, overrides the count entirely.

use tracing_subscriber::EnvFilter;

/// Crates whose events are shown at the chosen verbosity.
const TARGETS: &[&str] = &["hamming", "hamming_cli"];

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn directives(verbose: u8) -> String {
    let level = level_for(verbose);
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber, writing to stderr.
///
/// Calling this twice keeps the first subscriber.
pub fn init(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(verbose)));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .try_init()
    {
        eprintln!("warning: logging already initialized: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_by_verbosity() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(3), "trace");
        assert_eq!(level_for(200), "trace");
    }

    #[test]
    fn test_directives_cover_library_and_cli() {
        assert_eq!(directives(1), "hamming=info,hamming_cli=info");
    }
}
