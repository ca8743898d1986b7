//! Table generation workflow
//!
//! One worker thread per hardware execution unit; each worker draws random
//! start-points, walks its chains and flushes them to the shared table
//! writer in batches, so the writer lock is contended once per
//! [`WORKER_BUFFER_CHAINS`] chains rather than once per chain. Chain order
//! in the file depends on scheduling and is deliberately unspecified: the
//! table is sorted by endpoint afterwards.

use std::path::{Path, PathBuf};
use std::thread;

use log::{debug, info};

use crate::constants::WORKER_BUFFER_CHAINS;
use crate::domain::chain::{walk_chain, Chain};
use crate::domain::registry::HashEntry;
use crate::domain::{mwc, table_name};
use crate::error::{Error, Result};
use crate::infra::sort::sort_chains;
use crate::infra::table_store::{TableViewMut, TableWriter};

fn worker_count() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

/// Produce `quota` chains and push them through the shared writer.
fn produce_chains(
    writer: &TableWriter,
    mut quota: u64,
    chain_len: u32,
    entry: &HashEntry,
) -> Result<()> {
    let mut buffer = Vec::with_capacity(WORKER_BUFFER_CHAINS);
    while quota > 0 {
        let batch = quota.min(WORKER_BUFFER_CHAINS as u64) as usize;
        buffer.clear();
        for _ in 0..batch {
            let start = mwc::next_start_point();
            let end = walk_chain(start, chain_len, entry.func, entry.digest_len);
            buffer.push(Chain::new(start, end));
        }
        writer.append(&buffer)?;
        quota -= batch as u64;
    }
    Ok(())
}

/// Fill an open table with `chain_num` chains using all available cores.
///
/// The first `T - 1` workers each get `chain_num / T` chains; the last one
/// also takes the remainder. Any worker failure fails the whole operation.
pub fn generate_into(
    writer: &TableWriter,
    chain_num: u32,
    chain_len: u32,
    entry: &HashEntry,
) -> Result<()> {
    let workers = worker_count();
    let base = chain_num as u64 / workers as u64;
    let remainder = chain_num as u64 % workers as u64;
    debug!(
        "generating {} chains of length {} on {} workers",
        chain_num, chain_len, workers
    );

    thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|w| {
                let quota = if w < workers - 1 { base } else { base + remainder };
                scope.spawn(move || produce_chains(writer, quota, chain_len, entry))
            })
            .collect();

        let mut outcome = Ok(());
        for handle in handles {
            let joined = handle.join().unwrap_or(Err(Error::WorkerPanic));
            if outcome.is_ok() {
                outcome = joined;
            }
        }
        outcome
    })
}

/// Generate one table file in `dir` and sort it in place.
///
/// Returns the path of the finished table, named
/// `<hash>.<chain_num>.<chain_len>.<index>.rt`.
pub fn generate_table(
    dir: impl AsRef<Path>,
    chain_num: u32,
    chain_len: u32,
    index: u32,
    entry: &HashEntry,
) -> Result<PathBuf> {
    let path = dir
        .as_ref()
        .join(table_name::encode(entry.name, chain_num, chain_len, index));

    let writer = TableWriter::create(&path)?;
    generate_into(&writer, chain_num, chain_len, entry)?;
    drop(writer);

    if chain_num > 0 {
        let mut view = TableViewMut::open(&path, chain_num)?;
        sort_chains(view.chains_mut());
    }

    info!("generated table {}", path.display());
    Ok(path)
}

/// Generate `table_count` independent tables, indices `0..table_count`.
pub fn generate_tables(
    dir: impl AsRef<Path>,
    chain_num: u32,
    chain_len: u32,
    table_count: u32,
    entry: &HashEntry,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    (0..table_count)
        .map(|index| generate_table(dir, chain_num, chain_len, index, entry))
        .collect()
}
