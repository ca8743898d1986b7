//! Seed lookup over a sorted table
//!
//! The target digest could sit at any of the `chain_len` positions of some
//! recorded chain. For each candidate position, walking the digest forward
//! to the end of the chain yields the endpoint that chain would have; a
//! binary search over the sorted endpoints then produces candidate chains.
//! Because endpoints are not unique, all chains sharing the endpoint are
//! enumerated, and each candidate is confirmed by regeneration, which also
//! weeds out reduction collisions (false positives).

use std::path::Path;

use log::{debug, trace};

use crate::constants::MAX_DIGEST_LEN;
use crate::domain::chain::{regenerate_chain, Chain};
use crate::domain::hash::{reduce, HashFn};
use crate::domain::registry::HashRegistry;
use crate::domain::table_name;
use crate::error::{Error, Result};
use crate::infra::table_store::TableView;

/// Find the lowest index whose endpoint equals `endpoint`.
pub fn binary_search_first(table: &[Chain], endpoint: u32) -> Option<usize> {
    let mut lo = 0;
    let mut hi = table.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if table[mid].end < endpoint {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    if lo < table.len() && table[lo].end == endpoint {
        Some(lo)
    } else {
        None
    }
}

/// Search a sorted in-memory table for the seed behind `target`.
pub fn search_table(
    table: &[Chain],
    chain_len: u32,
    hash: HashFn,
    digest_len: usize,
    target: &[u8],
) -> Option<u32> {
    let mut scratch = [0u8; MAX_DIGEST_LEN];
    let mut walk = [0u8; MAX_DIGEST_LEN];

    for position in (0..chain_len).rev() {
        // Assume the target sits at `position` and walk it forward to the
        // endpoint the containing chain would have recorded.
        walk[..digest_len].copy_from_slice(target);
        for round in position..chain_len - 1 {
            let r = reduce(&walk[..digest_len], round);
            let digest = hash(r, &mut scratch);
            walk[..digest_len].copy_from_slice(&digest[..digest_len]);
        }
        let endpoint = reduce(&walk[..digest_len], chain_len - 1);

        if let Some(first) = binary_search_first(table, endpoint) {
            let mut idx = first;
            while idx < table.len() && table[idx].end == endpoint {
                debug!(
                    "endpoint {:#010x} matches chain {} at position {}",
                    endpoint, idx, position
                );
                if let Some(seed) =
                    regenerate_chain(table[idx].start, chain_len, hash, digest_len, target)
                {
                    return Some(seed);
                }
                trace!("chain {} was a false positive", idx);
                idx += 1;
            }
        }
    }
    None
}

/// Search a table file: decode its parameters from the filename, resolve the
/// hash, map the file and run the lookup.
///
/// `Ok(None)` is a completed search that found nothing, not an error.
pub fn search_table_file(
    path: impl AsRef<Path>,
    registry: &HashRegistry,
    target: &[u8],
) -> Result<Option<u32>> {
    let path = path.as_ref();
    let params = table_name::decode(path)?;
    let entry = registry.resolve(&params.hash_name)?;
    if target.len() != entry.digest_len {
        return Err(Error::DigestLength {
            expected: entry.digest_len,
            found: target.len(),
        });
    }

    let view = TableView::open(path, params.chain_num)?;
    Ok(search_table(
        view.chains(),
        params.chain_len,
        entry.func,
        entry.digest_len,
        target,
    ))
}
