//! RLP encoding of nodes and the content-addressed child references.
use alloc::vec::Vec;

use alloy_primitives::{Bytes, keccak256};
use relay_rlp::Item;

use super::nodes::Node;
use crate::hexprefix;

/// Children whose encoding reaches this size are referenced by the hash
/// of that encoding; smaller children are embedded in the parent.
pub(super) const HASH_REFERENCE_THRESHOLD: usize = 32;

impl Node {
    /// Structural RLP form of the node with child references resolved.
    pub(super) fn to_item(&self) -> Item {
        match self {
            Self::Empty => Item::Bytes(Bytes::new()),
            Self::Leaf(leaf) => Item::list([
                Item::Bytes(hexprefix::encode(&leaf.path, true)),
                Item::Bytes(leaf.value.clone()),
            ]),
            Self::Extension(ext) => Item::list([
                Item::Bytes(hexprefix::encode(&ext.path, false)),
                ext.child.to_child_reference(),
            ]),
            Self::Branch(branch) => {
                let mut items = Vec::with_capacity(17);
                for child in branch.children.iter() {
                    items.push(child.to_child_reference());
                }
                items.push(Item::Bytes(branch.value.clone().unwrap_or_default()));
                Item::List(items)
            }
        }
    }

    // The form a parent embeds: the node itself while its encoding stays
    // under 32 bytes, otherwise the Keccak-256 hash of that encoding.
    fn to_child_reference(&self) -> Item {
        match self {
            Self::Empty => Item::Bytes(Bytes::new()),
            node => {
                let item = node.to_item();
                if item.encoded_length() < HASH_REFERENCE_THRESHOLD {
                    item
                } else {
                    let hash = keccak256(item.encode());
                    Item::Bytes(Bytes::copy_from_slice(hash.as_slice()))
                }
            }
        }
    }

    /// Full RLP encoding of this node.
    pub(super) fn rlp_encode(&self) -> Bytes {
        self.to_item().encode()
    }
}
