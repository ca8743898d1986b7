//! Hash function abstraction and the digest reduction function
//!
//! A hash function maps a 32-bit seed to a fixed-width digest. To keep the
//! inner chain loops allocation-free, functions write into a caller-owned
//! scratch buffer and return the filled prefix.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::MAX_DIGEST_LEN;

/// Scratch buffer a hash function fills on every call.
///
/// Only the first `digest_len` bytes of the result are meaningful.
pub type DigestBuf = [u8; MAX_DIGEST_LEN];

/// A seed-to-digest hash function.
///
/// Must be pure and reentrant: no state shared between calls, so the same
/// function pointer can be used from every worker thread at once.
pub type HashFn = for<'a> fn(u32, &'a mut DigestBuf) -> &'a [u8];

/// Reduce a digest back into the 32-bit seed space.
///
/// The digest is consumed as little-endian words XOR-folded into the
/// accumulator, then the bytes left over past the last whole word are added
/// in, read from the tail of the digest backwards. The result is salted with
/// the round index so identical digests reduce to different seeds at
/// different chain positions.
///
/// The word-XOR / tail-ADD split is part of the on-disk contract: changing
/// either half makes every existing table unreadable.
#[inline]
pub fn reduce(digest: &[u8], round: u32) -> u32 {
    let mut acc = 0u32;

    let words = digest.len() / 4;
    for word in digest[..words * 4].chunks_exact(4) {
        acc ^= LittleEndian::read_u32(word);
    }

    for i in 0..digest.len() % 4 {
        acc = acc.wrapping_add(digest[digest.len() - 1 - i] as u32);
    }

    acc ^ round
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_folds_words_and_adds_tail() {
        // One whole word 0x04030201, one trailing byte 0x05 added on top.
        let digest = [0x01, 0x02, 0x03, 0x04, 0x05];
        assert_eq!(reduce(&digest, 0), 0x0403_0206);
    }

    #[test]
    fn reduce_salts_with_round() {
        let digest = [0x01, 0x02, 0x03, 0x04, 0x05];
        assert_eq!(reduce(&digest, 7), 0x0403_0206 ^ 7);
    }

    #[test]
    fn reduce_is_deterministic() {
        let digest: Vec<u8> = (0..16).collect();
        assert_eq!(reduce(&digest, 42), reduce(&digest, 42));
    }

    #[test]
    fn reduce_word_fold_is_xor() {
        // Two identical words cancel out.
        let digest = [0xAA, 0xBB, 0xCC, 0xDD, 0xAA, 0xBB, 0xCC, 0xDD];
        assert_eq!(reduce(&digest, 0), 0);
    }

    #[test]
    fn reduce_tail_reads_backwards() {
        // No whole word: bytes are taken from the end, so [1, 2, 3] adds
        // 3 + 2 + 1 regardless of order semantics elsewhere.
        let digest = [1u8, 2, 3];
        assert_eq!(reduce(&digest, 0), 6);
    }

    #[test]
    fn reduce_tail_addition_wraps() {
        let digest = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
        // Word fold gives 0xFFFFFFFF, tail adds 0xFF with wraparound.
        assert_eq!(reduce(&digest, 0), 0xFFFF_FFFFu32.wrapping_add(0xFF));
    }
}
