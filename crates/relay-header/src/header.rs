//! The 15-field proof-of-authority header and its canonical RLP.
use alloy_primitives::{Address, B64, B256, Bloom, Bytes, U256, keccak256};
use alloy_rlp::{Decodable, Encodable};
use serde::{Deserialize, Serialize};

/// A block header as carried by clique-style proof-of-authority chains,
/// reconstructed read-only from the source chain's RPC response.
///
/// Field order is the canonical RLP layout; the serde names are the
/// JSON-RPC response keys. Numeric fields stay [`U256`] so re-encoding
/// reproduces the chain's minimal big-endian integers bit-exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Hash of the parent block's signed header.
    pub parent_hash: B256,
    /// Hash of the uncle list, the empty-list constant on PoA chains.
    #[serde(rename = "sha3Uncles")]
    pub uncle_hash: B256,
    /// Block reward recipient; zero on chains where the signer is
    /// recovered from the seal instead.
    #[serde(rename = "miner")]
    pub coinbase: Address,
    /// State trie root after executing the block.
    pub state_root: B256,
    /// Transactions trie root.
    #[serde(rename = "transactionsRoot")]
    pub tx_root: B256,
    /// Receipts trie root.
    #[serde(rename = "receiptsRoot")]
    pub receipt_root: B256,
    /// Union of the block's log bloom filters.
    pub logs_bloom: Bloom,
    /// Chain-specific difficulty value.
    pub difficulty: U256,
    /// Block height.
    pub number: U256,
    /// Gas ceiling of the block.
    pub gas_limit: U256,
    /// Gas spent by the block's transactions.
    pub gas_used: U256,
    /// Block timestamp in seconds.
    pub timestamp: U256,
    /// Consensus extension: vanity bytes followed by the validator seal.
    pub extra_data: Bytes,
    /// Proof-of-work mix digest, zero on PoA chains.
    #[serde(rename = "mixHash")]
    pub mix_digest: B256,
    /// Proof-of-work nonce, zero on PoA chains.
    pub nonce: B64,
}

impl Header {
    fn payload_length(&self) -> usize {
        self.parent_hash.length()
            + self.uncle_hash.length()
            + self.coinbase.length()
            + self.state_root.length()
            + self.tx_root.length()
            + self.receipt_root.length()
            + self.logs_bloom.length()
            + self.difficulty.length()
            + self.number.length()
            + self.gas_limit.length()
            + self.gas_used.length()
            + self.timestamp.length()
            + self.extra_data.length()
            + self.mix_digest.length()
            + self.nonce.length()
    }

    /// The canonical signed encoding.
    pub fn rlp(&self) -> Bytes {
        alloy_rlp::encode(self).into()
    }

    /// Keccak-256 of the signed encoding - the block hash on chains
    /// whose consensus seals live inside `extra_data`.
    pub fn hash(&self) -> B256 {
        keccak256(self.rlp())
    }
}

impl Encodable for Header {
    fn encode(&self, out: &mut dyn alloy_rlp::BufMut) {
        let header =
            alloy_rlp::Header { list: true, payload_length: self.payload_length() };
        header.encode(out);
        self.parent_hash.encode(out);
        self.uncle_hash.encode(out);
        self.coinbase.encode(out);
        self.state_root.encode(out);
        self.tx_root.encode(out);
        self.receipt_root.encode(out);
        self.logs_bloom.encode(out);
        self.difficulty.encode(out);
        self.number.encode(out);
        self.gas_limit.encode(out);
        self.gas_used.encode(out);
        self.timestamp.encode(out);
        self.extra_data.encode(out);
        self.mix_digest.encode(out);
        self.nonce.encode(out);
    }

    fn length(&self) -> usize {
        let payload_length = self.payload_length();
        payload_length + alloy_rlp::Header { list: true, payload_length }.length()
    }
}

impl Decodable for Header {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let header = alloy_rlp::Header::decode(buf)?;
        if !header.list {
            return Err(alloy_rlp::Error::UnexpectedString);
        }
        let started_len = buf.len();
        let this = Self {
            parent_hash: Decodable::decode(buf)?,
            uncle_hash: Decodable::decode(buf)?,
            coinbase: Decodable::decode(buf)?,
            state_root: Decodable::decode(buf)?,
            tx_root: Decodable::decode(buf)?,
            receipt_root: Decodable::decode(buf)?,
            logs_bloom: Decodable::decode(buf)?,
            difficulty: Decodable::decode(buf)?,
            number: Decodable::decode(buf)?,
            gas_limit: Decodable::decode(buf)?,
            gas_used: Decodable::decode(buf)?,
            timestamp: Decodable::decode(buf)?,
            extra_data: Decodable::decode(buf)?,
            mix_digest: Decodable::decode(buf)?,
            nonce: Decodable::decode(buf)?,
        };
        let consumed = started_len - buf.len();
        if consumed != header.payload_length {
            return Err(alloy_rlp::Error::ListLengthMismatch {
                expected: header.payload_length,
                got: consumed,
            });
        }
        Ok(this)
    }
}
