//! In-memory extraction for literals and text files.

use std::io::Read;
use std::path::Path;

use crate::error::DistanceError;

/// Byte substituted for characters outside the ASCII range.
const NON_ASCII_REPLACEMENT: u8 = b'?';

/// Encode a literal one byte per character.
///
/// ASCII characters map to themselves; anything else becomes `?`, so the byte
/// count always equals the character count.
#[must_use]
pub fn encode_literal(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(c).ok().filter(u8::is_ascii).unwrap_or(NON_ASCII_REPLACEMENT))
        .collect()
}

/// Read a whole file whose size was verified as `expected_len`.
///
/// The read is bounded to `expected_len + 1` bytes so a file that grew since
/// verification cannot exhaust memory; the caller's length re-check then
/// rejects it.
///
/// # Errors
///
/// Returns [`DistanceError::Io`] if the file cannot be opened or read.
pub fn read_whole(path: &Path, expected_len: u64) -> Result<Vec<u8>, DistanceError> {
    let io_err = |source| DistanceError::Io {
        path: path.to_owned(),
        source,
    };

    let file = std::fs::File::open(path).map_err(io_err)?;
    let mut buffer = Vec::new();
    file.take(expected_len.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(io_err)?;
    Ok(buffer)
}
