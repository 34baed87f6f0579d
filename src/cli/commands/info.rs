use crate::Forklift;
use alloy::providers::Provider;
use eyre::Result;

impl Forklift {
    /// Display the chain, block heights and address book of the fork.
    pub(in crate::cli) async fn display_info(&self) -> Result<()> {
        let chain = self.get_chain().await?;
        let block = self.provider.get_block_number().await?;

        log::info!("Chain: {} (id {})", chain, chain.id());
        log::info!(
            "Forked at block {}, currently at block {}",
            self.config.fork_block,
            block
        );
        log::info!("Token decimals: {}", self.get_token_decimals().await?);

        Ok(())
    }
}
