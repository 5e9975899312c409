//! Debug rendering of the trie structure.
use core::fmt;

use super::Trie;
use super::nodes::Node;

impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if matches!(self.root, Node::Empty) {
            return write!(f, "Trie {{ EMPTY }}");
        }
        fmt_node(f, &self.root, 0)
    }
}

fn fmt_node(f: &mut fmt::Formatter<'_>, node: &Node, indent: usize) -> fmt::Result {
    for _ in 0..indent {
        write!(f, " ")?;
    }
    match node {
        Node::Empty => write!(f, "None"),
        Node::Leaf(leaf) => {
            write!(f, "Leaf {{ path: {:?}, value: {} }}", leaf.path.to_vec(), leaf.value)
        }
        Node::Extension(ext) => {
            writeln!(f, "Extension {:?}", ext.path.to_vec())?;
            fmt_node(f, &ext.child, indent + 4)
        }
        Node::Branch(branch) => {
            write!(f, "Branch")?;
            if let Some(value) = &branch.value {
                write!(f, " value: {value}")?;
            }
            for child in branch.children.iter() {
                writeln!(f)?;
                fmt_node(f, child, indent + 4)?;
            }
            Ok(())
        }
    }
}
