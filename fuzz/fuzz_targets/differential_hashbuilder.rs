#![no_main]

use std::collections::BTreeMap;

use alloy_primitives::{B256, Bytes};
use alloy_trie::{HashBuilder, Nibbles};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use relay_mpt::Trie;

#[derive(Debug, Arbitrary)]
struct Input {
    entries: Vec<([u8; 32], Vec<u8>)>,
}

fn model_root(model: &BTreeMap<B256, Bytes>) -> B256 {
    let mut hash_builder = HashBuilder::default();
    for (key, value) in model {
        hash_builder.add_leaf(Nibbles::unpack(*key), value);
    }
    hash_builder.root()
}

fuzz_target!(|input: Input| {
    let mut trie = Trie::new();
    let mut model = BTreeMap::<B256, Bytes>::new();

    for (key, value) in &input.entries {
        if value.is_empty() {
            // The reference builder treats an empty value as deletion.
            continue;
        }
        let key = B256::from(*key);
        let value = Bytes::copy_from_slice(value);
        trie.insert(key.as_slice(), value.clone());
        model.insert(key, value);

        // Validate after each insertion so transient divergences are not
        // masked by later entries.
        assert_eq!(trie.root_hash(), model_root(&model), "trie root != HashBuilder root");
    }
});
