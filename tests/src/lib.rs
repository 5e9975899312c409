#![allow(missing_docs)]

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, B256, Bytes, b256, hex, keccak256};
    use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
    use relay_header::{Header, SplicedHeader, VALIDATOR_SEAL_BYTES, splice};
    use relay_mpt::{Proof, Trie, verify};
    use relay_prover::{prove_index, receipt_trie, transaction_trie};
    use std::{fs::File, path::PathBuf};

    // Key/value set and node blobs shared with the on-chain verifier's
    // own test suite; the values under multi-byte keys are themselves
    // RLP-encoded short strings.
    const VERIFIER_ROOT: B256 =
        b256!("0xda2e968e25198a0a41e4dcdc6fcb03b9d49274b3d44cb35d921e4ebe3fb5c54c");

    fn verifier_entries() -> Vec<(Bytes, Bytes)> {
        vec![
            (hex!("61").into(), hex!("857465737431").into()),
            (hex!("826162").into(), hex!("74").into()),
            (hex!("83616263").into(), hex!("857465737433").into()),
            (hex!("8461626364").into(), hex!("857465737434").into()),
            (hex!("8461626564").into(), hex!("857465737435").into()),
        ]
    }

    fn verifier_trie() -> Trie {
        let mut trie = Trie::new();
        for (key, value) in verifier_entries() {
            trie.insert(&key, value);
        }
        trie
    }

    #[test]
    fn reproduces_the_verifier_root() {
        assert_eq!(verifier_trie().root_hash(), VERIFIER_ROOT);
    }

    #[test]
    fn reproduces_the_verifier_proof_blobs() {
        let trie = verifier_trie();

        let single_node = hex!("f83bf839808080808080c8318685746573743180a0207947cf85c03bd3d9f9ff5119267616318dcef0e12de2f8ca02ff2cdc720a978080808080808080");
        assert_eq!(trie.prove(&hex!("61")).unwrap().to_bytes()[..], single_node);

        let two_nodes = hex!("f87ff839808080808080c8318685746573743180a0207947cf85c03bd3d9f9ff5119267616318dcef0e12de2f8ca02ff2cdc720a978080808080808080f8428080c58320616274cc842061626386857465737433a05d495bd9e35ab0dab60dec18b21acc860829508e7df1064fce1f0b8fa4c0e8b2808080808080808080808080");
        assert_eq!(trie.prove(&hex!("826162")).unwrap().to_bytes()[..], two_nodes);
        assert_eq!(trie.prove(&hex!("83616263")).unwrap().to_bytes()[..], two_nodes);

        let four_nodes = hex!("f8cbf839808080808080c8318685746573743180a0207947cf85c03bd3d9f9ff5119267616318dcef0e12de2f8ca02ff2cdc720a978080808080808080f8428080c58320616274cc842061626386857465737433a05d495bd9e35ab0dab60dec18b21acc860829508e7df1064fce1f0b8fa4c0e8b2808080808080808080808080e583161626a06b1a1127b4c489762c8259381ff9ecf51b7ef0c2879b89e72c993edc944f1ccce5808080ca8220648685746573743480ca822064868574657374358080808080808080808080");
        assert_eq!(trie.prove(&hex!("8461626364")).unwrap().to_bytes()[..], four_nodes);
        assert_eq!(trie.prove(&hex!("8461626564")).unwrap().to_bytes()[..], four_nodes);
    }

    #[test]
    fn verifies_every_entry_against_the_shared_root() {
        let trie = verifier_trie();
        for (key, value) in verifier_entries() {
            let proof = trie.prove(&key).unwrap();
            assert_eq!(verify(VERIFIER_ROOT, &key, &value, &proof), Ok(true));

            let blob = proof.to_bytes();
            let replayed = Proof::from_bytes(&blob).unwrap();
            assert_eq!(verify(VERIFIER_ROOT, &key, &value, &replayed), Ok(true));
        }
    }

    #[test]
    fn rejects_the_verifier_negative_vectors() {
        let trie = verifier_trie();

        // Right key, wrong value.
        let proof = trie.prove(&hex!("61")).unwrap();
        assert_eq!(verify(VERIFIER_ROOT, &hex!("61"), &hex!("857465737432"), &proof), Ok(false));

        // Key absent from the trie, replayed against a sibling's proof.
        let proof = trie.prove(&hex!("826162")).unwrap();
        assert_eq!(verify(VERIFIER_ROOT, &hex!("826163"), &hex!("75"), &proof), Ok(false));

        // Value swapped between two present keys.
        let proof = trie.prove(&hex!("83616263")).unwrap();
        assert_eq!(
            verify(VERIFIER_ROOT, &hex!("83616263"), &hex!("857465737434"), &proof),
            Ok(false)
        );
    }

    fn block_records(count: usize, tag: &str) -> Vec<Bytes> {
        (0..count)
            .map(|index| {
                Bytes::copy_from_slice(keccak256(format!("{tag}-{index}")).as_slice())
            })
            .collect()
    }

    #[test]
    fn thirteen_slot_block_commits_to_a_stable_root() {
        let transactions = block_records(13, "transaction");
        let trie = transaction_trie(&transactions);
        assert_eq!(
            trie.root_hash(),
            b256!("0x93527f34682cdfe7e01a0bd8db119657d8169b651ebc76e4a65c70bbb05af482")
        );
    }

    #[test]
    fn two_hundred_slot_block_commits_to_a_stable_root() {
        let receipts = block_records(200, "receipt");
        let trie = receipt_trie(&receipts);
        assert_eq!(
            trie.root_hash(),
            b256!("0x449c18693feac23333862b24a04f6b083df53b5a87ab5d5472ac04242a0e4bc0")
        );

        let inclusion = prove_index(&trie, 49).unwrap();
        let proof = Proof::from_bytes(&inclusion.proof).unwrap();
        assert_eq!(verify(inclusion.root, &inclusion.key, &inclusion.value, &proof), Ok(true));
    }

    // A sealed block captured from a three-validator clique network: 13
    // transactions, 32 vanity bytes and a 65-byte seal in extra-data.
    const SEALED_BLOCK_JSON: &str = r#"{
        "parentHash": "0xaa912ad61a8aa3e2d1144e4c76b746720e41682122a8b77eff890099a0ff6284",
        "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
        "miner": "0x0000000000000000000000000000000000000000",
        "stateRoot": "0xb347dd25d9a8a456448aed25e072c9db54f464be5e3ce1f505cc171cacf3a967",
        "transactionsRoot": "0xcb9ecdf5483a1435113250201f690124501cfb0c071b697fcfee88c9a368ef35",
        "receiptsRoot": "0x1d000ef3f5ca9ebc62cc8aaa07e8fbd103583d1e3cbd28c13e62bc8eac5eb2f1",
        "logsBloom": "0x00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
        "difficulty": "0x2",
        "number": "0x1546",
        "gasLimit": "0x1405830e4c2a6c",
        "gasUsed": "0x42af2",
        "timestamp": "0x5b463454",
        "extraData": "0xd88301080b846765746888676f312e31302e32856c696e757800000000000000dd2ba07230e2186ee83ef77d88298c068205167718d48ba5b6ba1de552d0c6ce156011a58b49ed91855de154346968a7eeaaf20914022e58e4f6c0e1e02567ec00",
        "mixHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "nonce": "0x0000000000000000"
    }"#;

    #[test]
    fn splices_a_captured_sealed_header() {
        let header: Header = serde_json::from_str(SEALED_BLOCK_JSON).unwrap();
        assert_eq!(
            header.hash(),
            b256!("0x6f98a4b7bffb6c5b3dce3923be8a87eeef94ba22e3266cfcfd53407e70294fa4")
        );

        let spliced = splice(&header.rlp()).unwrap();
        assert_eq!(spliced.prefix[..], hex!("f9021d"));
        assert_eq!(spliced.extra_data_prefix[..], hex!("a0"));
        assert_eq!(
            spliced.signing_digest(),
            b256!("0x934f659b50cbb191da8b47947a42855ced679df51fafe5121ac69c3c7c1dd042")
        );

        // The stripped field keeps only the 32 vanity bytes, and the
        // digest differs from the block hash by exactly the seal.
        assert_eq!(spliced.unsigned.len(), header.rlp().len() - VALIDATOR_SEAL_BYTES - 1);
        assert_ne!(spliced.signing_digest(), header.hash());
    }

    fn signer_address(signing_key: &SigningKey) -> Address {
        Address::from_public_key(signing_key.verifying_key())
    }

    fn recover_sealer(header: &Header, spliced: &SplicedHeader) -> Address {
        let seal_offset = header.extra_data.len() - VALIDATOR_SEAL_BYTES;
        let seal = &header.extra_data[seal_offset..];
        let signature = Signature::from_slice(&seal[..64]).unwrap();
        let recovery_id = RecoveryId::from_byte(seal[64]).unwrap();
        let recovered = VerifyingKey::recover_from_prehash(
            spliced.signing_digest().as_slice(),
            &signature,
            recovery_id,
        )
        .unwrap();
        Address::from_public_key(&recovered)
    }

    #[test]
    fn sealed_header_signature_recovers_the_validator() {
        let signing_key = SigningKey::from_slice(&[0x11; 32]).unwrap();

        // Headers are sealed over their encoding with a zeroed seal slot.
        let mut draft_extra = vec![0_u8; 32];
        draft_extra.extend_from_slice(&[0; VALIDATOR_SEAL_BYTES]);
        let mut header: Header = serde_json::from_str(SEALED_BLOCK_JSON).unwrap();
        header.extra_data = draft_extra.into();

        let draft = splice(&header.rlp()).unwrap();
        let (signature, recovery_id) = signing_key
            .sign_prehash_recoverable(draft.signing_digest().as_slice())
            .unwrap();

        let mut sealed_extra = vec![0_u8; 32];
        sealed_extra.extend_from_slice(&signature.to_bytes());
        sealed_extra.push(recovery_id.to_byte());
        header.extra_data = sealed_extra.into();

        // Splicing the sealed header reproduces the unsigned body the
        // seal was computed over, whatever the seal bytes are.
        let spliced = splice(&header.rlp()).unwrap();
        assert_eq!(spliced.unsigned, draft.unsigned);
        assert_eq!(recover_sealer(&header, &spliced), signer_address(&signing_key));
    }

    #[test]
    fn full_relay_flow_for_a_synthetic_block() {
        let transactions = block_records(13, "transaction");
        let receipts = block_records(13, "receipt");
        let tx_trie = transaction_trie(&transactions);
        let rcpt_trie = receipt_trie(&receipts);

        let mut header: Header = serde_json::from_str(SEALED_BLOCK_JSON).unwrap();
        header.tx_root = tx_trie.root_hash();
        header.receipt_root = rcpt_trie.root_hash();

        let spliced = splice(&header.rlp()).unwrap();

        for (trie, records) in [(&tx_trie, &transactions), (&rcpt_trie, &receipts)] {
            for index in 0..records.len() as u64 {
                let inclusion = prove_index(trie, index).unwrap();
                let proof = Proof::from_bytes(&inclusion.proof).unwrap();
                assert_eq!(
                    verify(inclusion.root, &inclusion.key, &inclusion.value, &proof),
                    Ok(true)
                );
            }
        }

        // The spliced ranges stay consistent with the submitted roots.
        assert_eq!(spliced.prefix[..], spliced.unsigned[..spliced.prefix.len()]);
        assert_ne!(spliced.signing_digest(), header.hash());
    }

    #[test]
    fn transaction_root_matches_captured_block() {
        let mut fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        fixture_path.push("test_data/block_with_transactions.json");
        if !fixture_path.exists() {
            eprintln!(
                "skipping transaction_root_matches_captured_block: missing fixture {fixture_path:?}"
            );
            return;
        }

        let fixture: serde_json::Value =
            serde_json::from_reader(File::open(fixture_path).expect("failed to open fixture"))
                .expect("failed to parse fixture");
        let expected: B256 =
            fixture["transactionsRoot"].as_str().expect("transactionsRoot").parse().unwrap();
        let transactions: Vec<Bytes> = fixture["transactions"]
            .as_array()
            .expect("transactions")
            .iter()
            .map(|tx| tx.as_str().expect("raw transaction").parse().unwrap())
            .collect();

        let trie = transaction_trie(&transactions);
        assert_eq!(trie.root_hash(), expected);

        for index in 0..transactions.len() as u64 {
            let inclusion = prove_index(&trie, index).unwrap();
            let proof = Proof::from_bytes(&inclusion.proof).unwrap();
            assert_eq!(verify(inclusion.root, &inclusion.key, &inclusion.value, &proof), Ok(true));
        }
    }
}
