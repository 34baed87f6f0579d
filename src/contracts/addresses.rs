use alloy::primitives::{address, Address};
use alloy_chains::{Chain, NamedChain::Mainnet};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Addresses the harness works against on a given chain.
#[derive(Debug, Clone)]
pub struct ForkAddresses {
    /// The token contract.
    pub token: Address,
    /// A known holder of the token, used as the funding source.
    pub whale: Address,
    /// Token symbol, for display purposes.
    pub symbol: &'static str,
}

impl std::fmt::Display for ForkAddresses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Fork Addresses:\n  Token ({}): {}\n  Whale: {}",
            self.symbol, self.token, self.whale
        )
    }
}

lazy_static! {
    /// Token & whale addresses per chain-id.
    pub static ref ADDRESSES: HashMap<Chain, ForkAddresses> = {
        let mut contracts = HashMap::new();

        // mainnet: DAI, with a Binance hot wallet as the whale
        contracts.insert(
            Mainnet.into(),
            ForkAddresses {
                token: address!("6B175474E89094C44Da98b954EedeAC495271d0F"),
                whale: address!("28C6c06298d514Db089934071355E5743bf21d60"),
                symbol: "DAI",
            },
        );

        contracts
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_entry() {
        let addresses = ADDRESSES
            .get(&Chain::mainnet())
            .expect("mainnet must be in the address book");

        assert_eq!(
            addresses.token,
            address!("6B175474E89094C44Da98b954EedeAC495271d0F")
        );
        assert_eq!(
            addresses.whale,
            address!("28C6c06298d514Db089934071355E5743bf21d60")
        );
        assert_eq!(addresses.symbol, "DAI");
        assert_ne!(addresses.token, addresses.whale);
    }

    #[test]
    fn test_display_names_all_addresses() {
        let addresses = ADDRESSES.get(&Chain::mainnet()).unwrap();
        let display = addresses.to_string();

        assert!(display.contains("DAI"));
        assert!(display.contains(&addresses.token.to_string()));
        assert!(display.contains(&addresses.whale.to_string()));
    }
}
