use std::sync::Arc;

use tokio::sync::RwLock;

use crate::chain::Chain;
use crate::clock::Clock;
use crate::error::{BrokenLink, ChainError};
use crate::types::{BlockView, CheckoutRecord};

/// Shared handle to the chain.
///
/// Appends hold the write lock across reading the tail, building and
/// validating the candidate and pushing it, so two appends can never both
/// extend the same tail. Everything else only takes the read lock.
#[derive(Clone)]
pub struct Ledger {
    chain: Arc<RwLock<Chain>>,
}

impl Ledger {
    pub fn new(clock: Arc<dyn Clock>) -> Result<Self, ChainError> {
        Ok(Self::from_chain(Chain::new(clock)?))
    }

    #[must_use]
    pub fn from_chain(chain: Chain) -> Self {
        Self {
            chain: Arc::new(RwLock::new(chain)),
        }
    }

    /// Append a checkout record and return a copy of the new block.
    pub async fn append(&self, record: CheckoutRecord) -> Result<BlockView, ChainError> {
        let mut chain = self.chain.write().await;
        let view = BlockView::from(chain.append(record)?);
        drop(chain);
        Ok(view)
    }

    pub async fn snapshot(&self) -> Vec<BlockView> {
        self.chain.read().await.snapshot()
    }

    pub async fn validate(&self) -> Result<(), BrokenLink> {
        self.chain.read().await.validate()
    }

    /// Validate the chain and report its height, both read under one guard.
    pub async fn validate_with_height(&self) -> (u64, Result<(), BrokenLink>) {
        let chain = self.chain.read().await;
        let result = (chain.height(), chain.validate());
        drop(chain);
        result
    }

    pub async fn height(&self) -> u64 {
        self.chain.read().await.height()
    }

    pub async fn block(&self, position: u64) -> Option<BlockView> {
        self.chain.read().await.get_block(position).map(BlockView::from)
    }

    /// Returns the shared chain reference.
    #[must_use]
    pub const fn chain(&self) -> &Arc<RwLock<Chain>> {
        &self.chain
    }
}
