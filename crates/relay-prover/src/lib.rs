//! Per-block proof assembly: position-keyed tries over a block's
//! transaction and receipt lists, and submission-ready inclusion proofs
//! for single slots.
//!
//! Inputs are the byte-exact records the source chain itself encodes;
//! nothing here re-interprets them. Everything is synchronous and
//! allocation-only - callers own request lifetimes and parallelize
//! across blocks if they need to, one trie per block list, never shared.

use alloy_primitives::{B256, Bytes};
use relay_mpt::{Trie, TrieError};
use tracing::debug;

/// Proof material for one transaction or receipt slot, as handed to the
/// on-chain submission layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionProof {
    /// Root hash the proof resolves against.
    pub root: B256,
    /// RLP-encoded list position - the trie key.
    pub key: Bytes,
    /// The record stored under `key`.
    pub value: Bytes,
    /// Serialized proof blob for submission.
    pub proof: Bytes,
}

/// Trie key for list position `index`.
pub fn index_key(index: u64) -> Bytes {
    alloy_rlp::encode(index).into()
}

/// Builds the transactions trie of one block: keyed by position, each
/// value the transaction's canonical encoding.
pub fn transaction_trie(transactions: &[Bytes]) -> Trie {
    list_trie(transactions)
}

/// Builds the receipts trie of one block.
pub fn receipt_trie(receipts: &[Bytes]) -> Trie {
    list_trie(receipts)
}

fn list_trie(records: &[Bytes]) -> Trie {
    let mut trie = Trie::new();
    for (index, record) in records.iter().enumerate() {
        trie.insert(&index_key(index as u64), record.clone());
    }
    trie
}

/// Extracts the proof for the slot at `index`, failing with
/// [`TrieError::KeyNotFound`] when the index lies outside the list the
/// trie was built from.
pub fn prove_index(trie: &Trie, index: u64) -> Result<InclusionProof, TrieError> {
    let key = index_key(index);
    let value = trie.get(&key).cloned().ok_or(TrieError::KeyNotFound)?;
    let proof = trie.prove(&key)?;
    let root = trie.root_hash();
    debug!(
        target: "relay_prover",
        index,
        entries = proof.nodes().len(),
        %root,
        "extracted inclusion proof"
    );
    Ok(InclusionProof { root, key, value, proof: proof.to_bytes() })
}

/// Builds the transactions trie and proves one slot in a single step.
pub fn prove_transaction(
    transactions: &[Bytes],
    index: u64,
) -> Result<InclusionProof, TrieError> {
    prove_index(&transaction_trie(transactions), index)
}

/// Builds the receipts trie and proves one slot in a single step.
pub fn prove_receipt(receipts: &[Bytes], index: u64) -> Result<InclusionProof, TrieError> {
    prove_index(&receipt_trie(receipts), index)
}
