//! Merkle-Patricia tries and single-key inclusion proofs over the
//! transaction and receipt lists of a block.
//!
//! A trie here is a plain owned tree, built once per block list and
//! discarded after proof extraction; content-addressed child references
//! only materialize when nodes are encoded. The encoding reproduces the
//! canonical Ethereum trie layout bit-exactly so that an independent
//! verifier can replay extracted proofs.
#![no_std]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod error;
pub mod hexprefix;
mod trie;

pub use alloy_primitives::B256;
pub use alloy_trie::{EMPTY_ROOT_HASH, Nibbles};
pub use error::TrieError;
pub use trie::{Proof, Trie, verify};
