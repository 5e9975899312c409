//! Canonical recursive-length-prefix encoding over dynamically shaped items.
//!
//! The submission pipeline moves opaque byte blobs whose structure is only
//! known at runtime (trie nodes, proof lists, header field lists), so this
//! crate models RLP values as a tagged [`Item`] tree rather than deriving
//! codecs for fixed types. Length-prefix handling and canonicality checks
//! are delegated to `alloy-rlp`.
#![no_std]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod item;

pub use item::{Item, RlpError, list_header};
