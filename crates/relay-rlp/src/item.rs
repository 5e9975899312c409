//! The dynamically shaped RLP value and its codec.
use alloc::vec::Vec;
use alloy_primitives::Bytes;
use alloy_rlp::{Encodable, Header, PayloadView};

/// A dynamically shaped RLP value: a byte string or an ordered list of
/// further items. Every logical value has exactly one encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// An opaque byte string.
    Bytes(Bytes),
    /// An ordered list of nested items.
    List(Vec<Item>),
}

/// Errors produced while decoding RLP input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RlpError {
    /// The input is truncated, its declared and actual lengths disagree, it
    /// uses a non-minimal length prefix, or bytes trail the decoded item.
    #[error("malformed RLP encoding: {0}")]
    MalformedEncoding(alloy_rlp::Error),
}

impl From<alloy_rlp::Error> for RlpError {
    fn from(err: alloy_rlp::Error) -> Self {
        Self::MalformedEncoding(err)
    }
}

impl Item {
    /// A byte-string item.
    pub fn bytes(data: impl Into<Bytes>) -> Self {
        Self::Bytes(data.into())
    }

    /// A list item.
    pub fn list(items: impl IntoIterator<Item = Self>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Returns the payload when the item is a byte string.
    pub const fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Bytes(data) => Some(data),
            Self::List(_) => None,
        }
    }

    /// Returns the elements when the item is a list.
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::Bytes(_) => None,
            Self::List(items) => Some(items),
        }
    }

    /// Unwraps a byte string, rejecting lists as a shape mismatch.
    pub fn into_bytes(self) -> Result<Bytes, RlpError> {
        match self {
            Self::Bytes(data) => Ok(data),
            Self::List(_) => Err(alloy_rlp::Error::UnexpectedList.into()),
        }
    }

    /// Unwraps a list, rejecting byte strings as a shape mismatch.
    pub fn into_list(self) -> Result<Vec<Self>, RlpError> {
        match self {
            Self::Bytes(_) => Err(alloy_rlp::Error::UnexpectedString.into()),
            Self::List(items) => Ok(items),
        }
    }

    /// Length of the item's payload, before the length prefix is applied.
    fn payload_length(&self) -> usize {
        match self {
            Self::Bytes(data) => data.len(),
            Self::List(items) => items.iter().map(Self::encoded_length).sum(),
        }
    }

    /// Length of the full encoding, prefix included.
    pub fn encoded_length(&self) -> usize {
        match self {
            // A lone byte below 0x80 is its own encoding.
            Self::Bytes(data) if data.len() == 1 && data[0] < alloy_rlp::EMPTY_STRING_CODE => 1,
            _ => {
                let payload_length = self.payload_length();
                let header = Header { list: matches!(self, Self::List(_)), payload_length };
                header.length() + payload_length
            }
        }
    }

    /// Appends the canonical encoding of the item to `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        match self {
            Self::Bytes(data) => data[..].encode(out),
            Self::List(items) => {
                let header = Header { list: true, payload_length: self.payload_length() };
                header.encode(out);
                for item in items {
                    item.encode_into(out);
                }
            }
        }
    }

    /// Returns the canonical encoding of the item.
    pub fn encode(&self) -> Bytes {
        let mut out = Vec::with_capacity(self.encoded_length());
        self.encode_into(&mut out);
        out.into()
    }

    /// Decodes one item, requiring the entire input to be consumed.
    pub fn decode(mut buf: &[u8]) -> Result<Self, RlpError> {
        let item = Self::decode_raw(&mut buf)?;
        if !buf.is_empty() {
            return Err(alloy_rlp::Error::UnexpectedLength.into());
        }
        Ok(item)
    }

    /// Decodes one item from the front of `buf`, advancing past the
    /// consumed bytes.
    pub fn decode_raw(buf: &mut &[u8]) -> Result<Self, RlpError> {
        match Header::decode_raw(buf)? {
            PayloadView::String(payload) => Ok(Self::Bytes(Bytes::copy_from_slice(payload))),
            PayloadView::List(raw_items) => {
                let mut items = Vec::with_capacity(raw_items.len());
                for raw in raw_items {
                    items.push(Self::decode(raw)?);
                }
                Ok(Self::List(items))
            }
        }
    }
}

/// Encodes a list header for an already-encoded payload of
/// `payload_length` bytes, reserving capacity for the payload to follow.
pub fn list_header(payload_length: usize) -> Vec<u8> {
    let header = Header { list: true, payload_length };
    let mut out = Vec::with_capacity(header.length() + payload_length);
    header.encode(&mut out);
    out
}
