//! Table filename codec
//!
//! Every table parameter lives in the filename:
//! `<hash_name>.<chain_num>.<chain_len>.<index>.rt`. The hash name may be
//! any non-empty string without a dot; the three integers are decimal. The
//! index distinguishes independent tables generated with the same parameters
//! and is not needed again after generation, so decoding drops it.

use std::path::Path;

use crate::constants::TABLE_EXTENSION;
use crate::error::{Error, Result};

/// Parameters recovered from a table filename
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableName {
    pub hash_name: String,
    pub chain_num: u32,
    pub chain_len: u32,
}

/// Build the canonical filename for a table
pub fn encode(hash_name: &str, chain_num: u32, chain_len: u32, index: u32) -> String {
    format!(
        "{}.{}.{}.{}.{}",
        hash_name, chain_num, chain_len, index, TABLE_EXTENSION
    )
}

/// Parse table parameters out of a path's basename
pub fn decode(path: &Path) -> Result<TableName> {
    let bad = || Error::BadTableName(path.display().to_string());

    let base = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(bad)?;

    let (hash_name, rest) = base.split_once('.').ok_or_else(bad)?;
    if hash_name.is_empty() {
        return Err(bad());
    }

    let mut fields = rest.split('.');
    let chain_num: u32 = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(bad)?;
    let chain_len: u32 = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(bad)?;
    let _index: u32 = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(bad)?;

    if fields.next() != Some(TABLE_EXTENSION) || fields.next().is_some() {
        return Err(bad());
    }

    Ok(TableName {
        hash_name: hash_name.to_string(),
        chain_num,
        chain_len,
    })
}
