use crate::ledger::Ledger;
use crate::types::BlockView;

/// Log every block of a snapshot: previous hash, payload and hash.
pub fn log_blocks(blocks: &[BlockView]) {
    for block in blocks {
        let payload = serde_json::to_string_pretty(&block.payload)
            .unwrap_or_else(|e| format!("<unserializable payload: {e}>"));

        tracing::info!(
            position = block.position,
            previous_hash = %block.previous_hash,
            hash = %block.hash,
            "block data: {payload}"
        );
    }
}

/// Dump the chain as it stands right now. Only takes the read lock.
pub async fn dump_chain(ledger: Ledger) {
    let blocks = ledger.snapshot().await;
    tracing::debug!(height = blocks.len(), "dumping chain");
    log_blocks(&blocks);
}
