#![cfg(feature = "anvil")]

//! Read-only checks against the forked chain state.

use alloy::{primitives::U256, providers::Provider};
use eyre::Result;
use forklift::{Forklift, ForkliftConfig};

/// Using the forked blockchain,
///
/// 1. the fork starts at the configured snapshot height
/// 2. the whale balance is readable and funded at that height
#[tokio::test]
#[ignore = "requires the anvil binary and a mainnet RPC endpoint"]
async fn test_whale_balance_read() -> Result<()> {
    let config = ForkliftConfig::new_from_env()?.enable_logs();
    let fork_block = config.fork_block;
    let (node, _anvil) = Forklift::fork(config).await?;

    // the fork is pinned, so the reads below are reproducible
    let block = node.provider.get_block_number().await?;
    assert_eq!(block, fork_block);

    let whale_balance = node.get_token_balance(node.addresses.whale).await?;
    log::info!("Whale balance: {}", whale_balance);
    assert!(whale_balance.amount > U256::ZERO);

    // DAI reports 18 decimals
    assert_eq!(node.get_token_decimals().await?, 18);

    Ok(())
}
