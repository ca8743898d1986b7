//! Engine-wide constants

// =============================================================================
// Hash functions
// =============================================================================

/// Largest digest width any registered hash may produce, in bytes.
///
/// Scratch buffers handed to hash functions are always this large.
pub const MAX_DIGEST_LEN: usize = 64;

// =============================================================================
// Chains and tables
// =============================================================================

/// Byte size of one chain record on disk (two 32-bit seeds)
pub const CHAIN_RECORD_SIZE: usize = 8;

/// Chains a generator worker accumulates locally before taking the writer lock
pub const WORKER_BUFFER_CHAINS: usize = 8192;

/// File extension carried by every table file
pub const TABLE_EXTENSION: &str = "rt";

/// Seed space size (2^32)
pub const SEED_SPACE: u64 = 1u64 << 32;
