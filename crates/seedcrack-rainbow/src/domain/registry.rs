//! Hash function registry
//!
//! Maps a hash name to its implementation and digest width. Entries are
//! statically registered; resolution walks them in registration order and
//! returns the first match, so a caller-supplied entry can shadow a later
//! built-in of the same name.

use crate::domain::hash::HashFn;
use crate::domain::wikihash::{wikihash, WIKIHASH_DIGEST_LEN};
use crate::error::{Error, Result};

/// One registered hash function
#[derive(Clone, Copy, Debug)]
pub struct HashEntry {
    pub name: &'static str,
    pub func: HashFn,
    /// Meaningful bytes in the scratch buffer after a call, at most
    /// [`crate::constants::MAX_DIGEST_LEN`]
    pub digest_len: usize,
}

/// Hashes compiled into the engine
pub static BUILTIN_HASHES: &[HashEntry] = &[HashEntry {
    name: "wikihash",
    func: wikihash,
    digest_len: WIKIHASH_DIGEST_LEN,
}];

/// Name-to-function resolver over the registered hash entries
pub struct HashRegistry {
    entries: Vec<HashEntry>,
}

impl HashRegistry {
    /// Registry containing only the built-in hashes
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_HASHES.to_vec(),
        }
    }

    /// Registry with caller-supplied entries searched before the built-ins
    pub fn with_extra(extra: impl IntoIterator<Item = HashEntry>) -> Self {
        let mut entries: Vec<HashEntry> = extra.into_iter().collect();
        entries.extend_from_slice(BUILTIN_HASHES);
        Self { entries }
    }

    /// Resolve a hash by name, first match wins
    pub fn resolve(&self, name: &str) -> Result<&HashEntry> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| Error::UnknownHash(name.to_string()))
    }
}

impl Default for HashRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_DIGEST_LEN;
    use crate::domain::hash::DigestBuf;

    fn null_hash(_seed: u32, out: &mut DigestBuf) -> &[u8] {
        &out[..4]
    }

    #[test]
    fn resolves_builtin_wikihash() {
        let registry = HashRegistry::builtin();
        let entry = registry.resolve("wikihash").unwrap();
        assert_eq!(entry.digest_len, 16);
        assert!(entry.digest_len <= MAX_DIGEST_LEN);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let registry = HashRegistry::builtin();
        assert!(matches!(
            registry.resolve("nope"),
            Err(Error::UnknownHash(_))
        ));
    }

    #[test]
    fn extra_entries_resolve_first() {
        let registry = HashRegistry::with_extra([HashEntry {
            name: "wikihash",
            func: null_hash,
            digest_len: 4,
        }]);
        assert_eq!(registry.resolve("wikihash").unwrap().digest_len, 4);
    }
}
