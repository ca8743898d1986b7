//! seedcrack-rainbow - Rainbow table engine for 32-bit PRNG seed recovery
//!
//! This crate provides functionality to:
//! - Generate rainbow tables over any registered seed-to-digest hash
//! - Recover a seed from an observed digest by walking a sorted table
//! - Fall back to an exhaustive scan of the 2^32 seed space
//!
//! Tables trade memory for time: a few tens of megabytes of chains cover
//! the full space with near-certain success, e.g. three tables of 10m
//! chains of length 1000 recover about 99% of seeds. Table parameters can
//! be weighed up front with [`domain::probability::success_probability`].

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod infra;

// Re-export commonly used types
pub use app::exhaustive::crack;
pub use app::generator::{generate_table, generate_tables};
pub use app::lookup::{search_table, search_table_file};
pub use domain::chain::{regenerate_chain, walk_chain, Chain};
pub use domain::hash::{reduce, DigestBuf, HashFn};
pub use domain::registry::{HashEntry, HashRegistry};
pub use error::{Error, Result};
