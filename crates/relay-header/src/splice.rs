//! Splitting a signed header encoding into the byte ranges an on-chain
//! verifier needs to rebuild and check the signing digest.
use alloy_primitives::{B256, Bytes, keccak256};
use relay_rlp::{Item, RlpError};
use tracing::debug;

/// Length of the secp256k1 validator seal closing `extra_data` on
/// clique-style chains.
pub const VALIDATOR_SEAL_BYTES: usize = 65;

/// Number of fields in the signed header list.
const HEADER_FIELDS: usize = 15;

/// Position of `extra_data` within the header list.
const EXTRA_DATA_FIELD: usize = 12;

/// Byte layout of the consensus extension carried in `extra_data`.
///
/// The trailing-seal length is chain configuration, not a universal
/// constant: chains with a different consensus extension format need
/// their own layout, and a mismatch must surface as
/// [`SpliceError::HeaderTooShort`] rather than a silent truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraDataLayout {
    /// Bytes of the trailing validator seal.
    pub seal_bytes: usize,
}

impl Default for ExtraDataLayout {
    fn default() -> Self {
        Self { seal_bytes: VALIDATOR_SEAL_BYTES }
    }
}

/// The three byte ranges produced from one signed header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplicedHeader {
    /// List-length prefix bytes covering the unsigned encoding (tag byte
    /// included), handed over so the verifier never re-derives the list
    /// length on chain.
    pub prefix: Bytes,
    /// Complete header RLP with the seal stripped from `extra_data`;
    /// its Keccak-256 hash is the digest the validator signed.
    pub unsigned: Bytes,
    /// String prefix bytes of the stripped `extra_data` field alone,
    /// empty in the degenerate single-byte form.
    pub extra_data_prefix: Bytes,
}

impl SplicedHeader {
    /// The digest the validator's seal was computed over.
    pub fn signing_digest(&self) -> B256 {
        keccak256(&self.unsigned)
    }
}

/// Errors surfaced while splicing a signed header.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpliceError {
    /// `extra_data` is too small to carry the configured seal, meaning
    /// the header comes from a chain with a different consensus
    /// extension format.
    #[error("extra data holds {len} bytes, not enough for a {seal_bytes}-byte seal")]
    HeaderTooShort {
        /// Actual `extra_data` length.
        len: usize,
        /// Seal length the layout expects.
        seal_bytes: usize,
    },
    /// The input is not a well-formed 15-field header list.
    #[error(transparent)]
    Encoding(#[from] RlpError),
}

/// Splices `signed` assuming the default clique-style layout.
pub fn splice(signed: &[u8]) -> Result<SplicedHeader, SpliceError> {
    splice_with_layout(signed, ExtraDataLayout::default())
}

/// Splices the raw signed header encoding into the prefix, unsigned body
/// and extra-data prefix ranges under the given layout.
pub fn splice_with_layout(
    signed: &[u8],
    layout: ExtraDataLayout,
) -> Result<SplicedHeader, SpliceError> {
    let mut fields = Item::decode(signed)?.into_list()?;
    if fields.len() != HEADER_FIELDS {
        return Err(RlpError::MalformedEncoding(alloy_rlp::Error::ListLengthMismatch {
            expected: HEADER_FIELDS,
            got: fields.len(),
        })
        .into());
    }

    let extra_data = fields[EXTRA_DATA_FIELD].clone().into_bytes()?;
    if extra_data.len() < layout.seal_bytes {
        return Err(SpliceError::HeaderTooShort {
            len: extra_data.len(),
            seal_bytes: layout.seal_bytes,
        });
    }
    let stripped = extra_data.slice(..extra_data.len() - layout.seal_bytes);
    debug!(
        target: "relay_header",
        extra_data = extra_data.len(),
        stripped = stripped.len(),
        "spliced validator seal out of header"
    );

    let extra_data_prefix = prefix_of(&Item::Bytes(stripped.clone()));
    fields[EXTRA_DATA_FIELD] = Item::Bytes(stripped);
    let unsigned_item = Item::List(fields);
    let prefix = prefix_of(&unsigned_item);
    let unsigned = unsigned_item.encode();

    Ok(SplicedHeader { prefix, unsigned, extra_data_prefix })
}

// The length-prefix bytes of an item's encoding: everything before the
// payload, which is nothing for a single-byte string below 0x80.
fn prefix_of(item: &Item) -> Bytes {
    let encoded = item.encode();
    let payload_length = match item {
        Item::Bytes(data) => data.len(),
        Item::List(items) => items.iter().map(Item::encoded_length).sum(),
    };
    encoded.slice(..encoded.len() - payload_length)
}
