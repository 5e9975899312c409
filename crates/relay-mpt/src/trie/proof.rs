//! Extraction and independent replay of single-key inclusion proofs.
use alloc::vec::Vec;

use alloy_primitives::{B256, Bytes, keccak256};
use alloy_trie::Nibbles;
use relay_rlp::{Item, list_header};
use tracing::trace;

use super::Trie;
use super::hash::HASH_REFERENCE_THRESHOLD;
use super::nodes::Node;
use crate::{TrieError, hexprefix};

/// The ordered node encodings a verifier replays to rebuild the root
/// hash. Self-contained: replay needs no access to the trie that
/// produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Proof {
    nodes: Vec<Bytes>,
}

impl Proof {
    /// Node encodings in root-to-leaf order.
    pub fn nodes(&self) -> &[Bytes] {
        &self.nodes
    }

    /// Serializes the proof as a single RLP list for submission. The
    /// entries are themselves RLP, so they are spliced in unwrapped.
    pub fn to_bytes(&self) -> Bytes {
        let payload = self.nodes.iter().map(|node| node.len()).sum();
        let mut out = list_header(payload);
        for node in &self.nodes {
            out.extend_from_slice(node);
        }
        out.into()
    }

    /// Rebuilds a proof from its serialized form.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, TrieError> {
        let entries = Item::decode(buf)?.into_list()?;
        // Entries are canonical RLP, so re-encoding restores the exact
        // node bytes.
        Ok(Self { nodes: entries.iter().map(Item::encode).collect() })
    }
}

impl Trie {
    /// Walks `key` from the root, recording the encoding of every
    /// hash-referenced node on the way; embedded children travel inside
    /// their parent's entry.
    ///
    /// Fails with [`TrieError::KeyNotFound`] when the path dies out
    /// before reaching a value.
    pub fn prove(&self, key: &[u8]) -> Result<Proof, TrieError> {
        let mut path = Nibbles::unpack(key);
        let mut node = &self.root;
        let mut nodes = Vec::new();

        loop {
            let encoded = node.rlp_encode();
            if nodes.is_empty() || encoded.len() >= HASH_REFERENCE_THRESHOLD {
                nodes.push(encoded);
            }
            match node {
                Node::Empty => return Err(TrieError::KeyNotFound),
                Node::Leaf(leaf) => {
                    if leaf.path != path {
                        return Err(TrieError::KeyNotFound);
                    }
                    trace!(target: "relay_mpt", entries = nodes.len(), "extracted proof");
                    return Ok(Proof { nodes });
                }
                Node::Extension(ext) => {
                    let common = path.common_prefix_length(&ext.path);
                    if common < ext.path.len() {
                        return Err(TrieError::KeyNotFound);
                    }
                    path = path.slice(common..);
                    node = &ext.child;
                }
                Node::Branch(branch) => {
                    if path.is_empty() {
                        if branch.value.is_none() {
                            return Err(TrieError::KeyNotFound);
                        }
                        return Ok(Proof { nodes });
                    }
                    let slot = path.at(0);
                    path = path.slice(1..);
                    node = &branch.children[slot];
                }
            }
        }
    }
}

/// Replays `proof` against `root_hash`, returning whether it binds `key`
/// to `value`.
///
/// Every clean mismatch - a broken hash link, an empty slot, a
/// diverging path, a different value, a spent entry list - is the
/// negative outcome `Ok(false)`. Proof entries that are not structurally
/// valid RLP or hex-prefix data surface as an error instead, so a forged
/// proof and a corrupted one remain distinguishable.
pub fn verify(
    root_hash: B256,
    key: &[u8],
    value: &[u8],
    proof: &Proof,
) -> Result<bool, TrieError> {
    let mut path = Nibbles::unpack(key);
    let mut expected = root_hash;

    'entries: for entry in proof.nodes() {
        if keccak256(entry) != expected {
            return Ok(false);
        }
        let mut item = Item::decode(entry)?;
        // Follow children embedded in this entry until the walk steps
        // out through a hash reference or terminates.
        loop {
            let Some(fields) = item.as_list() else {
                return Ok(false);
            };
            let next = match fields.len() {
                17 => {
                    if path.is_empty() {
                        let Some(stored) = fields[16].as_bytes() else {
                            return Ok(false);
                        };
                        return Ok(stored.as_ref() == value);
                    }
                    let slot = path.at(0);
                    path = path.slice(1..);
                    fields[slot].clone()
                }
                2 => {
                    let Some(encoded_path) = fields[0].as_bytes() else {
                        return Ok(false);
                    };
                    let (node_path, is_leaf) = hexprefix::decode(encoded_path)?;
                    if is_leaf {
                        let Some(stored) = fields[1].as_bytes() else {
                            return Ok(false);
                        };
                        return Ok(node_path == path && stored.as_ref() == value);
                    }
                    if path.common_prefix_length(&node_path) < node_path.len() {
                        return Ok(false);
                    }
                    path = path.slice(node_path.len()..);
                    fields[1].clone()
                }
                _ => return Ok(false),
            };
            match next {
                Item::List(_) => item = next,
                Item::Bytes(reference) if reference.len() == 32 => {
                    expected = B256::from_slice(&reference);
                    continue 'entries;
                }
                // An empty slot or an undersized reference cannot carry
                // the key.
                Item::Bytes(_) => return Ok(false),
            }
        }
    }
    Ok(false)
}
