mod display;
mod get;
mod hash;
mod insert;
mod nodes;
mod proof;
mod trie;

use nodes::Node;
pub use proof::{Proof, verify};

/// An in-memory Merkle-Patricia trie over byte-string keys and values.
///
/// One trie is built per block list, hashed, mined for proofs and then
/// dropped; there is no backing database and nothing shared between
/// tries, so concurrent proof requests for different blocks cannot
/// interfere.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: Node,
}
