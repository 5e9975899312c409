//! The key-value surface of the trie.
use alloy_primitives::{B256, Bytes, keccak256};
use alloy_trie::Nibbles;
use tracing::trace;

use super::{Node, Trie};

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self { root: Node::Empty }
    }

    /// True when no key has been inserted.
    pub fn is_empty(&self) -> bool {
        matches!(self.root, Node::Empty)
    }

    /// Inserts `value` under `key`, replacing any previous value.
    pub fn insert(&mut self, key: &[u8], value: impl Into<Bytes>) {
        self.root.insert(Nibbles::unpack(key), value.into());
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &[u8]) -> Option<&Bytes> {
        self.root.get(Nibbles::unpack(key))
    }

    /// Keccak-256 commitment to the full key/value set.
    ///
    /// Identical sets hash identically regardless of insertion order;
    /// the empty trie hashes to the fixed empty-root constant.
    pub fn root_hash(&self) -> B256 {
        let root = keccak256(self.root.rlp_encode());
        trace!(target: "relay_mpt", %root, "computed trie root");
        root
    }
}
