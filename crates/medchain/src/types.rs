use serde::{Deserialize, Serialize};

use crate::crypto;
use crate::error::ChainError;

/// A checkout of a medical record: who accessed which record, for which appointment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRecord {
    pub medrecord_id: String,
    pub user: String,
    pub appointment_date: String,
    pub appointment_data: String,
    /// Marks the payload of the genesis block. Real submissions leave this `false`.
    #[serde(default)]
    pub is_genesis: bool,
}

impl CheckoutRecord {
    /// The empty payload carried by the genesis block.
    #[must_use]
    pub fn genesis() -> Self {
        Self {
            is_genesis: true,
            ..Self::default()
        }
    }
}

/// A block in the chain.
///
/// Blocks are fully populated and hashed on construction and never change
/// afterwards; the fields are only readable through accessors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub(crate) position: u64,
    pub(crate) payload: CheckoutRecord,
    pub(crate) timestamp: String,
    /// SHA-256 hex over `(position, timestamp, payload, previous_hash)`.
    pub(crate) hash: String,
    /// Hash of the block this one was appended to.
    pub(crate) previous_hash: String,
}

impl Block {
    /// Build a block from its contents and compute its hash.
    pub fn new(
        position: u64,
        timestamp: String,
        payload: CheckoutRecord,
        previous_hash: String,
    ) -> Result<Self, ChainError> {
        let hash = crypto::hash_block_fields(position, &timestamp, &payload, &previous_hash)?;
        Ok(Self {
            position,
            payload,
            timestamp,
            hash,
            previous_hash,
        })
    }

    /// Recompute the hash from the stored fields.
    pub fn compute_hash(&self) -> Result<String, ChainError> {
        crypto::hash_block_fields(
            self.position,
            &self.timestamp,
            &self.payload,
            &self.previous_hash,
        )
    }

    #[must_use]
    pub const fn position(&self) -> u64 {
        self.position
    }

    #[must_use]
    pub const fn payload(&self) -> &CheckoutRecord {
        &self.payload
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    #[must_use]
    pub fn hash(&self) -> &str {
        &self.hash
    }

    #[must_use]
    pub fn previous_hash(&self) -> &str {
        &self.previous_hash
    }
}

/// A detached, plain-value copy of a block for handing outside the chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockView {
    pub position: u64,
    pub timestamp: String,
    pub hash: String,
    pub previous_hash: String,
    pub payload: CheckoutRecord,
}

impl From<&Block> for BlockView {
    fn from(block: &Block) -> Self {
        Self {
            position: block.position,
            timestamp: block.timestamp.clone(),
            hash: block.hash.clone(),
            previous_hash: block.previous_hash.clone(),
            payload: block.payload.clone(),
        }
    }
}

/// A medical record as submitted to the service.
///
/// `id` is assigned by the service from `emr_id` and `record_date`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedRecord {
    #[serde(default)]
    pub id: String,
    pub patient: String,
    pub doctor: String,
    pub record_date: String,
    #[serde(rename = "emrid")]
    pub emr_id: String,
}

impl MedRecord {
    /// Assign the derived record id, replacing whatever the client sent.
    #[must_use]
    pub fn with_derived_id(mut self) -> Self {
        self.id = crypto::medrecord_id(&self.emr_id, &self.record_date);
        self
    }
}
