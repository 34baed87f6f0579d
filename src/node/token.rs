use super::Forklift;
use crate::contracts::*;
use alloy::primitives::{Address, U256};
use alloy::rpc::types::TransactionReceipt;
use eyre::{Context, Result};

impl Forklift {
    /// Returns the token balance of a given address.
    ///
    /// The amount is read with `balanceOf` and scaled for display with the
    /// on-chain decimal count; the symbol comes from the address book so the
    /// token interface can stay minimal.
    pub async fn get_token_balance(&self, address: Address) -> Result<TokenBalance> {
        let token = IERC20::new(self.addresses.token, &self.provider);
        let token_balance = token.balanceOf(address).call().await?._0;
        let token_decimals = token.decimals().call().await?._0;

        Ok(TokenBalance::new(
            token_balance,
            token_decimals,
            self.addresses.symbol.to_string(),
            Some(self.addresses.token),
        ))
    }

    /// Returns the token's decimal count.
    pub async fn get_token_decimals(&self) -> Result<u8> {
        let token = IERC20::new(self.addresses.token, &self.provider);
        let decimals = token.decimals().call().await?._0;
        Ok(decimals)
    }

    /// Transfers tokens from the configured wallet to `to`.
    pub async fn transfer_token(&self, to: Address, amount: U256) -> Result<TransactionReceipt> {
        let token = IERC20::new(self.addresses.token, &self.provider);
        let decimals = token.decimals().call().await?._0;

        let req = token.transfer(to, amount);
        let tx = req.send().await.wrap_err("could not transfer tokens")?;

        log::info!("Transfer hash: {:?}", tx.tx_hash());
        let receipt = tx
            .with_timeout(self.config.tx_timeout)
            .get_receipt()
            .await?;
        self.log_transfer_events(&receipt, decimals).await?;
        Ok(receipt)
    }

    /// Logs the `Transfer` events this token emitted for the given receipt.
    pub(crate) async fn log_transfer_events(
        &self,
        receipt: &TransactionReceipt,
        decimals: u8,
    ) -> Result<()> {
        let block = match receipt.block_number {
            Some(block) => block,
            None => return Ok(()),
        };

        let token = IERC20::new(self.addresses.token, &self.provider);
        let transfers = token
            .Transfer_filter()
            .from_block(block)
            .to_block(block)
            .query()
            .await?;

        for (transfer, log) in transfers {
            if log.transaction_hash == Some(receipt.transaction_hash) {
                let moved = TokenBalance::new(
                    transfer.value,
                    decimals,
                    self.addresses.symbol.to_string(),
                    Some(self.addresses.token),
                );
                log::info!(
                    "Transferred {} from {} to {}",
                    moved,
                    transfer.from,
                    transfer.to
                );
            }
        }

        Ok(())
    }
}
