use crate::Forklift;
use alloy::primitives::{utils::parse_units, Address};
use eyre::{Context, Result};

impl Forklift {
    /// Display native & token balances of the given addresses.
    pub(in crate::cli) async fn display_balances(&self, addresses: &[Address]) -> Result<()> {
        for address in addresses {
            let native_balance = self.get_native_balance(*address).await?;
            let token_balance = self.get_token_balance(*address).await?;

            log::info!("Balances of {}:", address);
            for balance in [native_balance, token_balance].iter() {
                log::info!("{}", balance);
            }
        }

        Ok(())
    }

    /// Transfer tokens out of the whale to `to`, logging the recipient
    /// balance before and after.
    ///
    /// The amount is given in whole tokens and scaled by the on-chain
    /// decimal count, so `"100"` moves 100 tokens.
    pub(in crate::cli) async fn transfer_from_whale(&self, to: Address, amount: &str) -> Result<()> {
        let decimals = self.get_token_decimals().await?;
        let amount = parse_units(amount, decimals)
            .wrap_err("could not parse the token amount")?
            .get_absolute();

        let balance_before = self.get_token_balance(to).await?;
        self.whale_transfer(to, amount).await?;
        let balance_after = self.get_token_balance(to).await?;

        log::info!("Recipient balance before: {}", balance_before);
        log::info!("Recipient balance after:  {}", balance_after);

        Ok(())
    }
}
