//! Shared generators for the proof-construction benchmarks.

// Dev-dependencies are exercised only by the `proof_generation` bench target,
// so the lib-test target sees them as unused. Silence the workspace's
// `unused_crate_dependencies` deny lint for that target.
#[cfg(test)]
use {criterion as _, relay_header as _, relay_mpt as _, relay_prover as _};

use alloy_primitives::{Bytes, keccak256};

/// Shape of a generated block list.
#[derive(Debug, Clone, Copy)]
pub struct BlockConfig {
    /// Number of records in the list.
    pub records: usize,
    /// Size of each record in bytes.
    pub record_bytes: usize,
}

/// Deterministic pseudo-records standing in for a block's encoded
/// transactions, keccak-stretched so every record differs.
pub fn generate_records(config: &BlockConfig) -> Vec<Bytes> {
    (0..config.records)
        .map(|index| {
            let mut record = Vec::with_capacity(config.record_bytes);
            let mut block = keccak256(index.to_be_bytes());
            while record.len() < config.record_bytes {
                record.extend_from_slice(block.as_slice());
                block = keccak256(block);
            }
            record.truncate(config.record_bytes);
            record.into()
        })
        .collect()
}
