//! Chunked streaming comparison for files too large to hold in memory.
//!
//! Both files are read in lockstep, one window of at most `chunk_size` bytes at
//! a time. Peak buffer memory is `2 * min(chunk_size, total)` regardless of
//! file size. Each file is opened once; the handles are dropped on every exit
//! path, including errors.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::error::DistanceError;
use crate::strategy::differing_positions;

/// Compare two files of verified equal size `total` chunk by chunk.
///
/// `chunk_size` must be non-zero.
///
/// # Errors
///
/// - [`DistanceError::Io`] if either file cannot be opened or read.
/// - [`DistanceError::Truncated`] if either file yields fewer bytes than
///   `total` (e.g. it was truncated after its size was checked).
///
/// Bytes appended past `total` after verification are not read.
pub fn compare_files(
    first: &Path,
    second: &Path,
    total: u64,
    chunk_size: usize,
) -> Result<u64, DistanceError> {
    let mut first_file = open(first)?;
    let mut second_file = open(second)?;

    let buffer_len = usize::try_from(total).map_or(chunk_size, |t| t.min(chunk_size));
    let mut first_buf = vec![0u8; buffer_len];
    let mut second_buf = vec![0u8; buffer_len];

    let mut offset: u64 = 0;
    let mut distance: u64 = 0;
    while offset < total {
        let wanted = usize::try_from(total - offset).map_or(buffer_len, |r| r.min(buffer_len));
        let first_chunk = &mut first_buf[..wanted];
        let second_chunk = &mut second_buf[..wanted];

        read_chunk(&mut first_file, first, offset, first_chunk)?;
        read_chunk(&mut second_file, second, offset, second_chunk)?;

        let chunk_distance = differing_positions(first_chunk, second_chunk);
        distance += chunk_distance;
        tracing::trace!(offset, len = wanted, chunk_distance, "compared chunk");

        offset += wanted as u64;
    }

    Ok(distance)
}

fn open(path: &Path) -> Result<File, DistanceError> {
    File::open(path).map_err(|source| DistanceError::Io {
        path: path.to_owned(),
        source,
    })
}

/// Fill `buf` completely from `reader`, or fail.
fn read_chunk(
    reader: &mut impl Read,
    path: &Path,
    offset: u64,
    buf: &mut [u8],
) -> Result<(), DistanceError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(source) => {
                return Err(DistanceError::Io {
                    path: path.to_owned(),
                    source,
                });
            }
        }
    }

    if filled < buf.len() {
        return Err(DistanceError::Truncated {
            path: path.to_owned(),
            offset,
            expected: buf.len(),
            actual: filled,
        });
    }
    Ok(())
}
