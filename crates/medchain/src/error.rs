use std::fmt;

/// Errors that can occur while building, appending or validating blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// The payload could not be serialized for hashing.
    Serialization(String),
    /// The candidate's `previous_hash` is not the hash of the block before it.
    Linkage { expected: String, got: String },
    /// The stored hash does not match the hash recomputed from the block's fields.
    Integrity { position: u64 },
    /// The candidate's position is not the predecessor's position plus one.
    Ordering { expected: u64, got: u64 },
    /// The first block of the chain is not a well-formed genesis block.
    InvalidGenesis(String),
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialization(msg) => write!(f, "serialization error: {msg}"),
            Self::Linkage { expected, got } => {
                write!(f, "previous hash does not match: expected {expected}, got {got}")
            }
            Self::Integrity { position } => {
                write!(f, "block {position} hash does not match its contents")
            }
            Self::Ordering { expected, got } => {
                write!(f, "invalid block position: expected {expected}, got {got}")
            }
            Self::InvalidGenesis(msg) => write!(f, "invalid genesis block: {msg}"),
        }
    }
}

impl std::error::Error for ChainError {}

/// The first adjacent pair of blocks that failed full-chain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    /// Index of the offending block (the later block of the pair).
    pub index: usize,
    pub reason: ChainError,
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chain broken at index {}: {}", self.index, self.reason)
    }
}

impl std::error::Error for BrokenLink {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}
