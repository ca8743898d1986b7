//! Table file access
//!
//! A table file is a bare sequence of 8-byte chain records, no header, no
//! footer. Records are written in the host's byte order so that a
//! memory-mapped file can be reinterpreted as `&[Chain]` directly; tables
//! are not portable across machines of differing endianness, which is
//! accepted for an offline attack tool.
//!
//! Write path: `TableWriter` appends batches under an internal lock so the
//! generator workers can share one file handle. Read path: the whole file is
//! mapped and viewed as a chain slice, read-only for lookup and read-write
//! for the in-place sort.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use byteorder::{NativeEndian, WriteBytesExt};
use memmap2::{Mmap, MmapMut};

use crate::constants::CHAIN_RECORD_SIZE;
use crate::domain::chain::Chain;
use crate::error::{Error, Result};

/// Shared append-only writer for a table under construction
pub struct TableWriter {
    file: Mutex<File>,
}

impl TableWriter {
    /// Create (or truncate) the table file
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Append a batch of chains.
    ///
    /// The batch is serialised outside the lock; the lock is held only for
    /// the single `write_all`, so concurrent workers serialise cheaply.
    pub fn append(&self, chains: &[Chain]) -> Result<()> {
        let mut bytes = Vec::with_capacity(chains.len() * CHAIN_RECORD_SIZE);
        for chain in chains {
            bytes.write_u32::<NativeEndian>(chain.start)?;
            bytes.write_u32::<NativeEndian>(chain.end)?;
        }

        use std::io::Write;
        let mut file = self.file.lock().expect("table writer poisoned");
        file.write_all(&bytes)?;
        Ok(())
    }
}

fn check_size(file: &File, chain_num: u32) -> Result<()> {
    let expected = chain_num as u64 * CHAIN_RECORD_SIZE as u64;
    let found = file.metadata()?.len();
    if found != expected {
        return Err(Error::TruncatedTable { expected, found });
    }
    Ok(())
}

/// Read-only memory-mapped view of a finished table
pub struct TableView {
    mmap: Mmap,
    chain_num: usize,
}

impl TableView {
    pub fn open(path: impl AsRef<Path>, chain_num: u32) -> Result<Self> {
        let file = File::open(path)?;
        check_size(&file, chain_num)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Self {
            mmap,
            chain_num: chain_num as usize,
        })
    }

    pub fn chains(&self) -> &[Chain] {
        // The mapping is page-aligned and sized to chain_num records; Chain
        // is repr(C) with no padding, so the cast is layout-exact.
        unsafe {
            std::slice::from_raw_parts(self.mmap.as_ptr() as *const Chain, self.chain_num)
        }
    }
}

/// Read-write memory-mapped view used by the in-place sort.
///
/// The mapping is shared, so dirty pages reach the file without an explicit
/// write-back when the view is dropped.
pub struct TableViewMut {
    mmap: MmapMut,
    chain_num: usize,
}

impl TableViewMut {
    pub fn open(path: impl AsRef<Path>, chain_num: u32) -> Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        check_size(&file, chain_num)?;
        let mmap = unsafe { MmapMut::map_mut(&file)? };
        Ok(Self {
            mmap,
            chain_num: chain_num as usize,
        })
    }

    pub fn chains_mut(&mut self) -> &mut [Chain] {
        unsafe {
            std::slice::from_raw_parts_mut(self.mmap.as_mut_ptr() as *mut Chain, self.chain_num)
        }
    }
}
