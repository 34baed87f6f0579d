mod token;

#[cfg(feature = "anvil")]
mod anvil;

use crate::configurations::ForkliftConfig;
use crate::contracts::*;
use alloy::providers::fillers::{
    ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller,
};
use alloy::providers::WalletProvider;
use alloy::{
    network::{Ethereum, EthereumWallet},
    primitives::Address,
    providers::{Identity, Provider, ProviderBuilder, RootProvider},
    transports::http::{Client, Http},
};
use alloy_chains::Chain;
use eyre::{eyre, Context, Result};

type ForkliftTransport = Http<Client>;
type ForkliftProvider = FillProvider<
    JoinFill<
        JoinFill<JoinFill<JoinFill<Identity, GasFiller>, NonceFiller>, ChainIdFiller>,
        WalletFiller<EthereumWallet>,
    >,
    RootProvider<ForkliftTransport>,
    ForkliftTransport,
    Ethereum,
>;

/// Handle to a forked chain: a provider connected to the simulator plus the
/// token & whale addresses resolved for the connected chain.
pub struct Forklift {
    pub config: ForkliftConfig,
    /// Token & whale addresses, respects the connected chain.
    pub addresses: ForkAddresses,
    /// Underlying provider type.
    pub provider: ForkliftProvider,
}

impl Forklift {
    /// Connects to the chain at the configured RPC URL.
    ///
    /// The token & whale addresses are chosen based on the chain id returned
    /// from the provider; a fork keeps the upstream chain id, so a mainnet
    /// fork resolves the mainnet entry.
    pub async fn new(config: ForkliftConfig) -> Result<Self> {
        let provider = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(config.wallet.clone())
            .on_http(config.rpc_url.clone());

        let chain_id_u64 = provider
            .get_chain_id()
            .await
            .wrap_err("Could not get chain id")?;
        let chain = Chain::from_id(chain_id_u64);

        let addresses = ADDRESSES
            .get(&chain)
            .cloned()
            .ok_or_else(|| eyre!("No known token & whale for chain {}", chain))?;

        let node = Self {
            config,
            addresses,
            provider,
        };

        node.check_token_contract().await?;

        Ok(node)
    }

    /// Creates a new handle with the given wallet.
    ///
    /// - Provider is cloned and its wallet is mutated.
    /// - Config is cloned and its wallet & address are updated.
    pub fn connect(&self, wallet: EthereumWallet) -> Self {
        let mut provider = self.provider.clone();
        *provider.wallet_mut() = wallet.clone();

        Self {
            provider,
            config: self.config.clone().with_wallet(wallet),
            addresses: self.addresses.clone(),
        }
    }

    /// Returns the connected chain.
    pub async fn get_chain(&self) -> Result<Chain> {
        let chain_id_u64 = self
            .provider
            .get_chain_id()
            .await
            .wrap_err("Could not get chain id")?;

        Ok(Chain::from_id(chain_id_u64))
    }

    /// Returns the native token balance of a given address.
    pub async fn get_native_balance(&self, address: Address) -> Result<TokenBalance> {
        let balance = self.provider.get_balance(address).await?;
        Ok(TokenBalance::native(balance))
    }

    /// Checks that the token contract is deployed on the connected chain.
    ///
    /// Returns an error if there is no code at the token address, e.g. when
    /// connected to a bare local node instead of a fork.
    pub async fn check_token_contract(&self) -> Result<()> {
        let token_size = self
            .provider
            .get_code_at(self.addresses.token)
            .await
            .map(|code| code.len())?;
        if token_size == 0 {
            return Err(eyre!(
                "Token contract not deployed at {}.",
                self.addresses.token
            ));
        }

        Ok(())
    }

    /// Returns the address of the configured wallet.
    #[inline(always)]
    pub fn address(&self) -> Address {
        self.config.address
    }
}

impl core::fmt::Display for Forklift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Forklift v{}\nAddress: {}\nRPC URL: {}",
            env!("CARGO_PKG_VERSION"),
            self.address(),
            self.config.rpc_url,
        )
    }
}
