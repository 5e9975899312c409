//! The closed set of node kinds making up the trie.
use alloc::boxed::Box;

use alloy_primitives::Bytes;
use alloy_trie::Nibbles;

/// A trie node. Edges here are plain ownership; the content-addressed
/// child references of the canonical encoding are derived on demand
/// when a node is encoded.
#[derive(Debug, Clone, Default)]
pub(crate) enum Node {
    /// Absence of a subtree.
    #[default]
    Empty,
    /// Terminal node holding the value of the key ending in `path`.
    Leaf(LeafNode),
    /// A run of nibbles shared by every key below a single child.
    Extension(ExtensionNode),
    /// A 16-way fork, one slot per next nibble, plus the value of a key
    /// that ends exactly here.
    Branch(BranchNode),
}

#[derive(Debug, Clone)]
pub(crate) struct LeafNode {
    pub(crate) path: Nibbles,
    pub(crate) value: Bytes,
}

#[derive(Debug, Clone)]
pub(crate) struct ExtensionNode {
    pub(crate) path: Nibbles,
    pub(crate) child: Box<Node>,
}

#[derive(Debug, Clone)]
pub(crate) struct BranchNode {
    pub(crate) children: Box<[Node; 16]>,
    pub(crate) value: Option<Bytes>,
}

impl BranchNode {
    /// A branch with every slot empty and no value.
    pub(crate) fn empty() -> Self {
        Self { children: Box::new([const { Node::Empty }; 16]), value: None }
    }
}
