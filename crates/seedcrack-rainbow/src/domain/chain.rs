//! Chain records and chain walking
//!
//! A chain compresses `chain_len` seeds into a single `(start, end)` pair by
//! alternating the hash with the round-salted reduction. Only the two ends
//! are stored; everything in between is recomputed on demand.

use crate::constants::MAX_DIGEST_LEN;
use crate::domain::hash::{reduce, HashFn};

/// One precomputed chain.
///
/// Exactly the on-disk record: two 32-bit seeds, no padding.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chain {
    /// First seed of the chain
    pub start: u32,
    /// Seed after the final reduction
    pub end: u32,
}

impl Chain {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

/// Walk a chain from `start` and return its endpoint.
pub fn walk_chain(start: u32, chain_len: u32, hash: HashFn, digest_len: usize) -> u32 {
    let mut buf = [0u8; MAX_DIGEST_LEN];
    let mut s = start;
    for round in 0..chain_len {
        let digest = hash(s, &mut buf);
        s = reduce(&digest[..digest_len], round);
    }
    s
}

/// Re-walk a chain looking for the seed that hashes to `target`.
///
/// At every position the digest is compared against the target before the
/// reduction is applied, so a hit returns the seed sitting at that position.
/// `None` means the endpoint match that led here was a false positive.
pub fn regenerate_chain(
    start: u32,
    chain_len: u32,
    hash: HashFn,
    digest_len: usize,
    target: &[u8],
) -> Option<u32> {
    let mut buf = [0u8; MAX_DIGEST_LEN];
    let mut s = start;
    for round in 0..chain_len {
        let digest = &hash(s, &mut buf)[..digest_len];
        if digest == target {
            return Some(s);
        }
        s = reduce(digest, round);
    }
    None
}
