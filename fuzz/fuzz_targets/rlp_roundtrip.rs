#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use relay_rlp::Item;

#[derive(Debug, Arbitrary)]
enum Value {
    Bytes(Vec<u8>),
    List(Vec<Value>),
}

fn to_item(value: &Value) -> Item {
    match value {
        Value::Bytes(data) => Item::bytes(data.clone()),
        Value::List(values) => Item::list(values.iter().map(to_item)),
    }
}

fuzz_target!(|input: Value| {
    let item = to_item(&input);

    let encoded = item.encode();
    assert_eq!(encoded.len(), item.encoded_length(), "declared length != encoded length");

    let decoded = Item::decode(&encoded).expect("canonical encoding must decode");
    assert_eq!(decoded, item, "roundtrip changed the item");

    // Truncations of a canonical encoding are never themselves canonical.
    if encoded.len() > 1 {
        assert!(Item::decode(&encoded[..encoded.len() - 1]).is_err());
    }
});
