use alloy::{
    hex::FromHex,
    network::EthereumWallet,
    primitives::{Address, B256},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};

use color_eyre::Section;
use eyre::{Context, Result};
use std::{env, time::Duration};

/// Block height the fork is pinned to when `FORK_BLOCK_NUMBER` is unset.
pub const DEFAULT_FORK_BLOCK: u64 = 19_258_000;

/// How long to wait for a transaction receipt before giving up.
const TX_TIMEOUT_SECS: u64 = 30;

// first account of Anvil/Hardhat
const DEV_SECRET_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

#[derive(Debug, Clone)]
pub struct ForkliftConfig {
    /// Wallet used for transactions sent from the local test signer.
    pub wallet: EthereumWallet,
    /// Address of the local test signer.
    pub address: Address,
    /// Upstream endpoint the fork is sourced from.
    pub rpc_url: Url,
    /// Block height the fork snapshots the upstream chain at.
    pub fork_block: u64,
    /// Receipt-wait bound for transactions.
    pub tx_timeout: Option<Duration>,
}

impl ForkliftConfig {
    /// Creates a config for the given upstream RPC URL.
    ///
    /// The fork block defaults to [`DEFAULT_FORK_BLOCK`] and the signer to the
    /// well-known Anvil/Hardhat dev account #0; a simulation-only workflow
    /// needs no real private key.
    pub fn new(rpc_url: Url) -> Self {
        let secret_key = B256::from_hex(DEV_SECRET_KEY).unwrap();
        let signer = PrivateKeySigner::from_bytes(&secret_key).unwrap();
        let address = signer.address();
        let wallet = EthereumWallet::from(signer);

        Self {
            wallet,
            address,
            rpc_url,
            fork_block: DEFAULT_FORK_BLOCK,
            tx_timeout: Some(Duration::from_secs(TX_TIMEOUT_SECS)),
        }
    }

    /// Creates the config from the environment variables.
    ///
    /// - `RPC_URL` (required): upstream endpoint to fork state from.
    /// - `FORK_BLOCK_NUMBER` (optional): snapshot height, falls back to
    ///   [`DEFAULT_FORK_BLOCK`] when unset, empty or unparseable.
    /// - `SECRET_KEY` (optional): overrides the default dev-account signer.
    pub fn new_from_env() -> Result<Self> {
        // .env is optional, e.g. CI passes the variables directly
        let _ = dotenvy::dotenv();

        let rpc_url_env = env::var("RPC_URL")
            .wrap_err("RPC_URL is not set")
            .suggestion("RPC_URL must point at an archive endpoint, e.g. within .env.")?;
        let rpc_url = Url::parse(&rpc_url_env).wrap_err("Could not parse RPC URL.")?;

        let fork_block = fork_block_or_default(env::var("FORK_BLOCK_NUMBER").ok());
        log::debug!("Forking {} at block {}", rpc_url, fork_block);

        let mut config = Self::new(rpc_url).with_fork_block(fork_block);
        if let Ok(private_key_hex) = env::var("SECRET_KEY") {
            let secret_key = B256::from_hex(private_key_hex)
                .wrap_err("Could not hex-decode secret key")
                .suggestion("SECRET_KEY must be hexadecimals within .env.")?;
            config = config.with_secret_key(&secret_key)?;
        }

        Ok(config)
    }

    /// Change the RPC URL.
    pub fn with_rpc_url(mut self, rpc_url: Url) -> Self {
        self.rpc_url = rpc_url;
        self
    }

    /// Change the block height the fork is pinned to.
    pub fn with_fork_block(mut self, fork_block: u64) -> Self {
        self.fork_block = fork_block;
        self
    }

    /// Change the receipt-wait bound, `None` waits indefinitely.
    pub fn with_tx_timeout(mut self, tx_timeout: Option<Duration>) -> Self {
        self.tx_timeout = tx_timeout;
        self
    }

    /// Change the signer with a new one with the given secret key.
    pub fn with_secret_key(self, secret_key: &B256) -> Result<Self> {
        let signer =
            PrivateKeySigner::from_bytes(secret_key).wrap_err("Could not parse private key")?;
        Ok(self.with_signer(signer))
    }

    /// Change the signer with a new one.
    pub fn with_signer(mut self, signer: PrivateKeySigner) -> Self {
        self.address = signer.address();
        self.wallet = EthereumWallet::from(signer);
        self
    }

    /// Change the wallet, along with the address derived from it.
    pub fn with_wallet(mut self, wallet: EthereumWallet) -> Self {
        self.address = wallet.default_signer().address();
        self.wallet = wallet;
        self
    }

    /// Enables `env_logger`, ignoring a logger that is already installed.
    pub fn enable_logs(self) -> Self {
        let _ = env_logger::try_init();
        self
    }

    /// Enables colored `eyre` error reports.
    pub fn enable_color_eyre(self) -> Result<Self> {
        color_eyre::install()?;
        Ok(self)
    }
}

/// Coerces a `FORK_BLOCK_NUMBER`-style value to a height.
///
/// Absent and empty values fall back to [`DEFAULT_FORK_BLOCK`]; so does
/// anything that is not a decimal number, with a warning instead of an error.
pub(crate) fn fork_block_or_default(value: Option<String>) -> u64 {
    match value.as_deref().map(str::trim) {
        None | Some("") => DEFAULT_FORK_BLOCK,
        Some(height) => height.parse().unwrap_or_else(|_| {
            log::warn!(
                "Ignoring unparseable fork block {:?}, using {}",
                height,
                DEFAULT_FORK_BLOCK
            );
            DEFAULT_FORK_BLOCK
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_fork_block_fallbacks() {
        assert_eq!(fork_block_or_default(None), DEFAULT_FORK_BLOCK);
        assert_eq!(
            fork_block_or_default(Some("".to_string())),
            DEFAULT_FORK_BLOCK
        );
        assert_eq!(
            fork_block_or_default(Some("  ".to_string())),
            DEFAULT_FORK_BLOCK
        );
        assert_eq!(
            fork_block_or_default(Some("not-a-height".to_string())),
            DEFAULT_FORK_BLOCK
        );
        assert_eq!(
            fork_block_or_default(Some("-5".to_string())),
            DEFAULT_FORK_BLOCK
        );
    }

    #[test]
    fn test_fork_block_parses_decimal() {
        assert_eq!(
            fork_block_or_default(Some("19300000".to_string())),
            19_300_000
        );
        assert_eq!(fork_block_or_default(Some(" 12345 ".to_string())), 12_345);
    }

    #[test]
    fn test_default_signer_is_dev_account_zero() {
        let config = ForkliftConfig::new(Url::parse("http://localhost:8545").unwrap());
        assert_eq!(
            config.address,
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
        assert_eq!(config.fork_block, DEFAULT_FORK_BLOCK);
    }

    #[test]
    fn test_with_secret_key_changes_address() {
        let config = ForkliftConfig::new(Url::parse("http://localhost:8545").unwrap());
        let before = config.address;

        // second account of Anvil/Hardhat
        let secret_key =
            B256::from_hex("59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d")
                .unwrap();
        let config = config.with_secret_key(&secret_key).unwrap();

        assert_ne!(config.address, before);
        assert_eq!(
            config.address,
            address!("70997970C51812dc3A010C7d01b50e0d17dc79C8")
        );
    }

    #[test]
    fn test_with_wallet_changes_address() {
        let config = ForkliftConfig::new(Url::parse("http://localhost:8545").unwrap());
        let before = config.address;

        let signer = PrivateKeySigner::random();
        let expected = signer.address();
        let config = config.with_wallet(EthereumWallet::from(signer));

        assert_ne!(config.address, before);
        assert_eq!(config.address, expected);
    }
}
