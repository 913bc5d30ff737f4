use crate::error::ChainError;
use crate::types::{Block, CheckoutRecord};

/// Previous hash of the genesis block: the hex form of a 32-byte all-zero digest.
pub const GENESIS_PREVIOUS_HASH: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// Create the genesis block: position 0, a genesis-flagged empty payload and
/// [`GENESIS_PREVIOUS_HASH`] as its parent.
pub fn create_genesis(timestamp: String) -> Result<Block, ChainError> {
    Block::new(
        0,
        timestamp,
        CheckoutRecord::genesis(),
        GENESIS_PREVIOUS_HASH.to_string(),
    )
}

/// Check that `block` is a well-formed genesis block.
pub fn verify_genesis(block: &Block) -> Result<(), ChainError> {
    if block.position() != 0 {
        return Err(ChainError::InvalidGenesis(format!(
            "position is {}, expected 0",
            block.position()
        )));
    }

    if block.previous_hash() != GENESIS_PREVIOUS_HASH {
        return Err(ChainError::InvalidGenesis(
            "previous hash is not the genesis sentinel".into(),
        ));
    }

    if !block.payload().is_genesis {
        return Err(ChainError::InvalidGenesis(
            "payload is not flagged as genesis".into(),
        ));
    }

    if block.compute_hash()? != block.hash() {
        return Err(ChainError::InvalidGenesis(
            "hash does not match its contents".into(),
        ));
    }

    Ok(())
}
