#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod chain;
pub mod clock;
pub mod config;
mod crypto;
pub mod diagnostics;
mod error;
mod genesis;
pub mod http;
mod ledger;
mod types;

pub use chain::{Chain, is_valid_successor, validate_successor};
pub use crypto::{hash_block_fields, medrecord_id};
pub use error::{BrokenLink, ChainError};
pub use genesis::{GENESIS_PREVIOUS_HASH, create_genesis, verify_genesis};
pub use ledger::Ledger;
pub use types::{Block, BlockView, CheckoutRecord, MedRecord};
