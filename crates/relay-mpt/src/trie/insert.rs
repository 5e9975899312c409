//! Key insertion: walking, splitting and forking nodes along a nibble
//! path.
use alloc::boxed::Box;
use core::mem;

use alloy_primitives::Bytes;
use alloy_trie::Nibbles;

use super::nodes::{BranchNode, ExtensionNode, LeafNode, Node};

impl Node {
    pub(super) fn insert(&mut self, path: Nibbles, value: Bytes) {
        match self {
            Self::Empty => {
                *self = Self::Leaf(LeafNode { path, value });
            }
            Self::Leaf(leaf) => {
                if leaf.path == path {
                    leaf.value = value;
                    return;
                }
                // Fork the two keys around a branch at the divergence
                // point. Either remainder may be empty; the shorter key
                // then occupies the branch value slot.
                let common = leaf.path.common_prefix_length(&path);
                let mut branch = BranchNode::empty();
                let detached_path = leaf.path.slice(common..);
                let detached_value = mem::take(&mut leaf.value);
                branch.attach(detached_path, detached_value);
                branch.attach(path.slice(common..), value);
                *self = extend(path.slice(..common), Self::Branch(branch));
            }
            Self::Extension(ext) => {
                let common = ext.path.common_prefix_length(&path);
                if common == ext.path.len() {
                    ext.child.insert(path.slice(common..), value);
                    return;
                }
                // The fork lands inside the shared run: split it around
                // a new branch, keeping the tail as a shorter extension
                // when one remains.
                let mut branch = BranchNode::empty();
                let tail = ext.path.slice(common + 1..);
                let child = mem::take(&mut *ext.child);
                branch.children[ext.path.at(common)] = extend(tail, child);
                branch.attach(path.slice(common..), value);
                *self = extend(path.slice(..common), Self::Branch(branch));
            }
            Self::Branch(branch) => {
                if path.is_empty() {
                    branch.value = Some(value);
                } else {
                    branch.children[path.at(0)].insert(path.slice(1..), value);
                }
            }
        }
    }
}

impl BranchNode {
    // Routes a remainder path into the matching slot, or the value
    // position when the path ends at this branch.
    fn attach(&mut self, path: Nibbles, value: Bytes) {
        if path.is_empty() {
            self.value = Some(value);
        } else {
            self.children[path.at(0)] =
                Node::Leaf(LeafNode { path: path.slice(1..), value });
        }
    }
}

/// Wraps `node` in an extension when the shared prefix is non-empty.
fn extend(prefix: Nibbles, node: Node) -> Node {
    if prefix.is_empty() {
        node
    } else {
        Node::Extension(ExtensionNode { path: prefix, child: Box::new(node) })
    }
}
