//! Fork-control utilities on top of Anvil.
//!
//! This module is only available when the `anvil` feature is enabled.

use super::Forklift;
use crate::configurations::ForkliftConfig;
use crate::contracts::IERC20;
use alloy::network::EthereumWallet;
use alloy::node_bindings::{Anvil, AnvilInstance};
use alloy::primitives::{utils::parse_ether, Address, U256};
use alloy::providers::ext::AnvilApi;
use alloy::providers::ProviderBuilder;
use alloy::rpc::types::TransactionReceipt;
use alloy::signers::local::PrivateKeySigner;
use eyre::{Context, Result};

impl Forklift {
    /// Default ETH funding amount for generated wallets.
    const ANVIL_FUND_ETHER: &'static str = "10000";

    /// ETH credited to the whale so it can pay gas on the fork.
    const WHALE_GAS_ETHER: &'static str = "1";

    /// Creates a new Anvil instance forking the configured RPC URL at the
    /// configured block height, and connects a handle to it.
    ///
    /// Returns the handle and the Anvil instance. Note that when the Anvil
    /// instance is dropped, you will lose the forked chain.
    pub async fn fork(config: ForkliftConfig) -> Result<(Self, AnvilInstance)> {
        let anvil = Anvil::new()
            .fork(config.rpc_url.to_string())
            .fork_block_number(config.fork_block)
            .try_spawn()?;
        log::info!(
            "Forked {} at block {}",
            config.rpc_url,
            config.fork_block
        );

        let node = Self::new(config.with_rpc_url(anvil.endpoint_url())).await?;

        Ok((node, anvil))
    }

    /// Generates a random wallet, funded with the given `fund` amount.
    ///
    /// If `fund` is not provided, 10K ETH is used.
    pub async fn funded_wallet(&self, fund: Option<U256>) -> Result<EthereumWallet> {
        let fund = match fund {
            Some(fund) => fund,
            None => parse_ether(Self::ANVIL_FUND_ETHER)?,
        };
        let signer = PrivateKeySigner::random();
        self.set_native_balance(signer.address(), fund).await?;

        Ok(EthereumWallet::from(signer))
    }

    /// Sets the native balance of an account to an arbitrary value.
    pub async fn set_native_balance(&self, address: Address, amount: U256) -> Result<()> {
        self.provider.anvil_set_balance(address, amount).await?;
        Ok(())
    }

    /// Begins treating `address` as a controllable signer: transactions with
    /// its `from` are accepted without a signature.
    pub async fn impersonate(&self, address: Address) -> Result<()> {
        self.provider.anvil_impersonate_account(address).await?;
        log::debug!("Impersonating {}", address);
        Ok(())
    }

    /// Stops treating `address` as a controllable signer.
    pub async fn stop_impersonating(&self, address: Address) -> Result<()> {
        self.provider
            .anvil_stop_impersonating_account(address)
            .await?;
        log::debug!("Stopped impersonating {}", address);
        Ok(())
    }

    /// Transfers tokens out of `from` without holding its key.
    ///
    /// The request is dispatched through a signer-less provider so it goes
    /// out as `eth_sendTransaction` and the node signs for `from`; it is
    /// rejected unless `from` is currently impersonated.
    pub async fn transfer_token_as(
        &self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<TransactionReceipt> {
        let provider = ProviderBuilder::new().on_http(self.config.rpc_url.clone());
        let token = IERC20::new(self.addresses.token, &provider);
        let decimals = token.decimals().call().await?._0;

        let req = token.transfer(to, amount).from(from);
        let tx = req
            .send()
            .await
            .wrap_err("could not transfer tokens as the impersonated account")?;

        log::info!("Impersonated transfer hash: {:?}", tx.tx_hash());
        let receipt = tx
            .with_timeout(self.config.tx_timeout)
            .get_receipt()
            .await?;
        self.log_transfer_events(&receipt, decimals).await?;
        Ok(receipt)
    }

    /// Runs the whole whale workflow: credit the whale with gas money,
    /// assume its identity, transfer `amount` tokens to `to`, and release
    /// the identity again.
    pub async fn whale_transfer(&self, to: Address, amount: U256) -> Result<TransactionReceipt> {
        let whale = self.addresses.whale;

        self.set_native_balance(whale, parse_ether(Self::WHALE_GAS_ETHER)?)
            .await?;
        self.impersonate(whale).await?;

        // release the identity even if the transfer itself failed, and
        // keep the transfer's own error over one from the release
        let receipt = self.transfer_token_as(whale, to, amount).await;
        if let Err(err) = self.stop_impersonating(whale).await {
            log::warn!("Could not stop impersonating {}: {}", whale, err);
        }

        receipt
    }
}
