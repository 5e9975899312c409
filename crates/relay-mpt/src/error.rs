//! Error taxonomy for trie construction and proof handling.
use relay_rlp::RlpError;

/// Errors surfaced while building tries and extracting or replaying
/// proofs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// A node path carries a hex-prefix flag nibble outside the four
    /// defined values, or no flag nibble at all.
    #[error("invalid hex-prefix path encoding")]
    InvalidHexPrefix,
    /// The requested key does not resolve to a value in this trie.
    #[error("key not found in trie")]
    KeyNotFound,
    /// A proof entry or node payload is not well-formed RLP.
    #[error(transparent)]
    Encoding(#[from] RlpError),
}
