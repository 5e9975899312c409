#![no_main]

use std::collections::BTreeMap;

use alloy_primitives::Bytes;
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use relay_mpt::{Proof, Trie, verify};

#[derive(Debug, Arbitrary)]
struct Input {
    entries: Vec<(Vec<u8>, Vec<u8>)>,
    flip_bit: u8,
}

fuzz_target!(|input: Input| {
    let mut trie = Trie::new();
    let mut model = BTreeMap::<Vec<u8>, Bytes>::new();

    for (key, value) in &input.entries {
        let value = Bytes::copy_from_slice(value);
        trie.insert(key, value.clone());
        model.insert(key.clone(), value);
    }

    let root = trie.root_hash();
    for (key, value) in &model {
        let proof = trie.prove(key).expect("inserted key must prove");
        assert_eq!(
            verify(root, key, value, &proof),
            Ok(true),
            "extracted proof must verify"
        );

        // The serialized blob replays identically.
        let replayed = Proof::from_bytes(&proof.to_bytes()).expect("blob must parse");
        assert_eq!(verify(root, key, value, &replayed), Ok(true));

        // A value with one flipped bit never verifies.
        if !value.is_empty() {
            let mut wrong = value.to_vec();
            let position = input.flip_bit as usize % wrong.len();
            wrong[position] ^= 1 << (input.flip_bit % 8);
            assert_eq!(verify(root, key, &wrong, &proof), Ok(false));
        }
    }
});
