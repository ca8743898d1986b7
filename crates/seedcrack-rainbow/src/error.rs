use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown hash function: {0}")]
    UnknownHash(String),
    #[error("bad table name: {0}")]
    BadTableName(String),
    #[error("table size mismatch: expected {expected} bytes, found {found}")]
    TruncatedTable { expected: u64, found: u64 },
    #[error("target digest is {found} bytes, hash produces {expected}")]
    DigestLength { expected: usize, found: usize },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("generator worker panicked")]
    WorkerPanic,
}

pub type Result<T> = std::result::Result<T, Error>;
