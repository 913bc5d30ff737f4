use md5::Md5;
use sha2::{Digest, Sha256};

use crate::error::ChainError;
use crate::types::CheckoutRecord;

/// SHA-256 hash of arbitrary bytes.
pub fn hash_bytes(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Builds the bytes a block hash is computed over:
/// `position (u64 LE) || timestamp || json(payload) || previous_hash`
fn block_hash_message(
    position: u64,
    timestamp: &str,
    payload: &CheckoutRecord,
    previous_hash: &str,
) -> Result<Vec<u8>, ChainError> {
    let payload_bytes =
        serde_json::to_vec(payload).map_err(|e| ChainError::Serialization(e.to_string()))?;

    let mut msg =
        Vec::with_capacity(8 + timestamp.len() + payload_bytes.len() + previous_hash.len());
    msg.extend_from_slice(&position.to_le_bytes());
    msg.extend_from_slice(timestamp.as_bytes());
    msg.extend_from_slice(&payload_bytes);
    msg.extend_from_slice(previous_hash.as_bytes());
    Ok(msg)
}

/// Lowercase hex SHA-256 digest of a block's content.
pub fn hash_block_fields(
    position: u64,
    timestamp: &str,
    payload: &CheckoutRecord,
    previous_hash: &str,
) -> Result<String, ChainError> {
    let msg = block_hash_message(position, timestamp, payload, previous_hash)?;
    Ok(hex::encode(hash_bytes(&msg)))
}

/// Derives a medical record id from its EMR id and record date: MD5 hex of
/// `emr_id || record_date`.
#[must_use]
pub fn medrecord_id(emr_id: &str, record_date: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(emr_id.as_bytes());
    hasher.update(record_date.as_bytes());
    hex::encode(hasher.finalize())
}
