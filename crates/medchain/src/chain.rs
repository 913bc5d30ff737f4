use std::sync::Arc;

use crate::clock::Clock;
use crate::error::{BrokenLink, ChainError};
use crate::genesis;
use crate::types::{Block, BlockView, CheckoutRecord};

/// The blockchain: an ordered, append-only list of validated blocks.
pub struct Chain {
    blocks: Vec<Block>,
    clock: Arc<dyn Clock>,
}

impl Chain {
    /// Create a new chain holding only a genesis block stamped with the clock's current time.
    pub fn new(clock: Arc<dyn Clock>) -> Result<Self, ChainError> {
        let genesis = genesis::create_genesis(clock.now())?;

        Ok(Self {
            blocks: vec![genesis],
            clock,
        })
    }

    /// Build a block carrying `payload` on top of `previous`, stamped with the chain's clock.
    pub fn create_block(
        &self,
        previous: &Block,
        payload: CheckoutRecord,
    ) -> Result<Block, ChainError> {
        Block::new(
            previous.position() + 1,
            self.clock.now(),
            payload,
            previous.hash().to_string(),
        )
    }

    /// Wrap `payload` in a new block on top of the tail and append it.
    pub fn append(&mut self, payload: CheckoutRecord) -> Result<&Block, ChainError> {
        let candidate = self.create_block(self.tail(), payload)?;
        self.append_block(candidate)
    }

    /// Validate an already constructed block against the tail and append it.
    ///
    /// On error the block is dropped and the chain is left untouched.
    pub fn append_block(&mut self, candidate: Block) -> Result<&Block, ChainError> {
        if let Err(e) = validate_successor(&candidate, self.tail()) {
            tracing::warn!(position = candidate.position(), error = %e, "rejected block");
            return Err(e);
        }

        tracing::info!(
            position = candidate.position(),
            hash = candidate.hash(),
            "appended block"
        );
        self.blocks.push(candidate);
        Ok(self.tail())
    }

    /// Re-verify the whole chain: the genesis block, then every adjacent pair.
    ///
    /// Stops at the first broken pair and reports the index of its later block.
    pub fn validate(&self) -> Result<(), BrokenLink> {
        let genesis = self
            .blocks
            .first()
            .expect("chain always has at least the genesis block");
        genesis::verify_genesis(genesis).map_err(|reason| BrokenLink { index: 0, reason })?;

        for (i, pair) in self.blocks.windows(2).enumerate() {
            validate_successor(&pair[1], &pair[0]).map_err(|reason| BrokenLink {
                index: i + 1,
                reason,
            })?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// The most recently appended block.
    #[must_use]
    pub fn tail(&self) -> &Block {
        self.blocks
            .last()
            .expect("chain always has at least the genesis block")
    }

    /// The number of blocks in the chain, genesis included.
    #[must_use]
    pub const fn height(&self) -> u64 {
        self.blocks.len() as u64
    }

    /// Get a block by position.
    #[must_use]
    pub fn get_block(&self, position: u64) -> Option<&Block> {
        usize::try_from(position)
            .ok()
            .and_then(|i| self.blocks.get(i))
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Detached copies of every block, in chain order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<BlockView> {
        self.blocks.iter().map(BlockView::from).collect()
    }

    #[cfg(test)]
    pub(crate) fn blocks_mut(&mut self) -> &mut Vec<Block> {
        &mut self.blocks
    }
}

/// Check that `candidate` may follow `previous`.
///
/// Checks run in order and stop at the first failure: linkage, then the
/// candidate's own hash, then its position.
pub fn validate_successor(candidate: &Block, previous: &Block) -> Result<(), ChainError> {
    if candidate.previous_hash() != previous.hash() {
        return Err(ChainError::Linkage {
            expected: previous.hash().to_string(),
            got: candidate.previous_hash().to_string(),
        });
    }

    if candidate.compute_hash()? != candidate.hash() {
        return Err(ChainError::Integrity {
            position: candidate.position(),
        });
    }

    let expected = previous.position() + 1;
    if candidate.position() != expected {
        return Err(ChainError::Ordering {
            expected,
            got: candidate.position(),
        });
    }

    Ok(())
}

#[must_use]
pub fn is_valid_successor(candidate: &Block, previous: &Block) -> bool {
    validate_successor(candidate, previous).is_ok()
}
