//! Path resolution without modification.
use alloy_primitives::Bytes;
use alloy_trie::Nibbles;

use super::nodes::Node;

impl Node {
    pub(super) fn get(&self, path: Nibbles) -> Option<&Bytes> {
        match self {
            Self::Empty => None,
            Self::Leaf(leaf) => (leaf.path == path).then_some(&leaf.value),
            Self::Extension(ext) => {
                let common = path.common_prefix_length(&ext.path);
                if common == ext.path.len() {
                    ext.child.get(path.slice(common..))
                } else {
                    None
                }
            }
            Self::Branch(branch) => {
                if path.is_empty() {
                    branch.value.as_ref()
                } else {
                    branch.children[path.at(0)].get(path.slice(1..))
                }
            }
        }
    }
}
