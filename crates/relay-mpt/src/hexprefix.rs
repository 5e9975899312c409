//! Hex-prefix encoding: a nibble path plus a leaf/extension flag packed
//! into the byte string stored in a node's path position.
use alloc::vec::Vec;

use alloy_primitives::Bytes;
use alloy_trie::Nibbles;

use crate::TrieError;

const FLAG_EXTENSION_EVEN: usize = 0b0000;
const FLAG_EXTENSION_ODD: usize = 0b0001;
const FLAG_LEAF_EVEN: usize = 0b0010;
const FLAG_LEAF_ODD: usize = 0b0011;

/// Packs `path` and the node-kind flag into stored form.
///
/// The flag nibble records leaf vs extension and the parity of the
/// nibble count; an odd path's first nibble shares the flag byte, an
/// even path is padded with a zero nibble after the flag.
pub fn encode(path: &Nibbles, is_leaf: bool) -> Bytes {
    let kind = if is_leaf { FLAG_LEAF_EVEN } else { FLAG_EXTENSION_EVEN };
    let odd = path.len() % 2 == 1;

    let mut out = Vec::with_capacity(1 + path.len() / 2);
    let mut at = 0;
    if odd {
        out.push((((kind | 0b0001) as u8) << 4) | path.at(0) as u8);
        at = 1;
    } else {
        out.push((kind as u8) << 4);
    }
    while at < path.len() {
        out.push(((path.at(at) as u8) << 4) | path.at(at + 1) as u8);
        at += 2;
    }
    out.into()
}

/// Exact inverse of [`encode`]: recovers the nibble path and whether the
/// node is a leaf.
///
/// Fails with [`TrieError::InvalidHexPrefix`] on empty input or a flag
/// nibble outside the four defined values.
pub fn decode(encoded: &[u8]) -> Result<(Nibbles, bool), TrieError> {
    let nibbles = Nibbles::unpack(encoded);
    if nibbles.is_empty() {
        return Err(TrieError::InvalidHexPrefix);
    }
    let (is_leaf, odd) = match nibbles.at(0) {
        FLAG_EXTENSION_EVEN => (false, false),
        FLAG_EXTENSION_ODD => (false, true),
        FLAG_LEAF_EVEN => (true, false),
        FLAG_LEAF_ODD => (true, true),
        _ => return Err(TrieError::InvalidHexPrefix),
    };
    let path = if odd { nibbles.slice(1..) } else { nibbles.slice(2..) };
    Ok((path, is_leaf))
}
