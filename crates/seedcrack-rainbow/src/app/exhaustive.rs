//! Exhaustive seed search
//!
//! Brute-force fallback when no table covers the target: the 32-bit seed
//! space is split into one contiguous range per hardware execution unit and
//! every worker hashes its way through its range. The first hit is published
//! through a pair of relaxed atomics that every worker polls; relaxed is
//! enough because the values are only read back after all workers have been
//! joined.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::thread;

use log::debug;

use crate::constants::{MAX_DIGEST_LEN, SEED_SPACE};
use crate::domain::registry::HashEntry;
use crate::error::{Error, Result};

/// Split the full seed space into `workers` inclusive ranges.
///
/// The union of the ranges is exactly `[0, u32::MAX]`, gap-free and
/// overlap-free; the last range absorbs the division remainder.
pub fn partition_ranges(workers: usize) -> Vec<(u32, u32)> {
    let chunk = SEED_SPACE / workers as u64;
    (0..workers as u64)
        .map(|w| {
            let start = w * chunk;
            let end = if w == workers as u64 - 1 {
                SEED_SPACE - 1
            } else {
                (w + 1) * chunk - 1
            };
            (start as u32, end as u32)
        })
        .collect()
}

fn scan_range(
    range: (u32, u32),
    entry: &HashEntry,
    target: &[u8],
    found: &AtomicBool,
    seed: &AtomicU32,
) {
    let mut buf = [0u8; MAX_DIGEST_LEN];
    let mut s = range.0;
    loop {
        if found.load(Ordering::Relaxed) {
            return;
        }
        if &(entry.func)(s, &mut buf)[..entry.digest_len] == target {
            debug!("exhaustive search hit at seed {:#010x}", s);
            seed.store(s, Ordering::Relaxed);
            found.store(true, Ordering::Relaxed);
            return;
        }
        if s == range.1 {
            return;
        }
        s += 1;
    }
}

/// Scan the whole seed space for a seed hashing to `target`.
///
/// `Ok(None)` means the space is exhausted without a hit, which for a
/// well-formed target only happens when the digest was not produced by
/// this hash at all.
pub fn crack(entry: &HashEntry, target: &[u8]) -> Result<Option<u32>> {
    if target.len() != entry.digest_len {
        return Err(Error::DigestLength {
            expected: entry.digest_len,
            found: target.len(),
        });
    }

    let workers = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    let found = AtomicBool::new(false);
    let seed = AtomicU32::new(0);

    thread::scope(|scope| {
        for range in partition_ranges(workers) {
            let found = &found;
            let seed = &seed;
            scope.spawn(move || scan_range(range, entry, target, found, seed));
        }
    });

    if found.load(Ordering::Relaxed) {
        Ok(Some(seed.load(Ordering::Relaxed)))
    } else {
        Ok(None)
    }
}
