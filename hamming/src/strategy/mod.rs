//! Byte-extraction strategies.
//!
//! Literals and text files are compared in memory ([`memory`]); binary files
//! are streamed chunk by chunk ([`stream`]). Both end in
//! [`count_differences`].

pub mod memory;
pub mod stream;

use crate::error::Rejection;
use crate::validator;

/// Count positions where `a` and `b` differ.
///
/// # Errors
///
/// Returns [`Rejection::UnequalLength`] if the slices differ in length; no
/// partial count is produced.
pub fn count_differences(a: &[u8], b: &[u8]) -> Result<u64, Rejection> {
    if let Err(rejection) = validator::same_length_bytes(a, b) {
        tracing::warn!(%rejection, "refusing to compare byte sequences of different length");
        return Err(rejection);
    }
    Ok(differing_positions(a, b))
}

/// Unchecked count over the common prefix; callers guarantee equal lengths.
#[must_use]
pub fn differing_positions(a: &[u8], b: &[u8]) -> u64 {
    a.iter()
        .zip(b)
        .fold(0, |acc, (x, y)| acc + u64::from(x != y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sequences_have_zero_distance() {
        assert_eq!(count_differences(&[], &[]), Ok(0));
        assert_eq!(
            count_differences(&[0, 1, 2, 3, 4], &[0x00, 0x01, 0x02, 0x03, 0x04]),
            Ok(0)
        );
    }

    #[test]
    fn test_counts_differing_positions() {
        assert_eq!(count_differences(b"abcdefgh", b"abcdefff"), Ok(2));
        assert_eq!(count_differences(&[0xff; 8], &[0x00; 8]), Ok(8));
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = b"karolin";
        let b = b"kathrin";
        assert_eq!(count_differences(a, b), Ok(3));
        assert_eq!(count_differences(a, b), count_differences(b, a));
    }

    #[test]
    fn test_unequal_lengths_fail_closed() {
        assert_eq!(
            count_differences(&[0, 1, 2, 3, 4, 5], &[0, 1, 2, 3, 4]),
            Err(Rejection::UnequalLength { left: 6, right: 5 })
        );
    }
}
