use alloy::primitives::{
    utils::{format_units, Unit},
    Address, U256,
};
use std::fmt::Display;

/// A token balance: amount, the token's decimal count and symbol, and the
/// token address if it is a non-native token.
#[derive(Debug)]
pub struct TokenBalance {
    /// Amount of tokens as bigint, in the token's smallest unit.
    pub amount: U256,
    /// Scaling factor converting the smallest unit to the display unit.
    pub decimals: u8,
    /// Token symbol, for display purposes.
    pub symbol: String,
    /// Token contract address, `None` if its ETH (native token).
    pub address: Option<Address>,
}

impl TokenBalance {
    /// Create a new token balance.
    pub fn new(amount: U256, decimals: u8, symbol: String, address: Option<Address>) -> Self {
        Self {
            amount,
            decimals,
            symbol,
            address,
        }
    }

    /// Create a native-currency balance, always 18 decimals.
    pub fn native(amount: U256) -> Self {
        Self::new(amount, Unit::ETHER.get(), "ETH".to_string(), None)
    }
}

impl Display for TokenBalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // a token may report more decimals than format_units supports
        match format_units(self.amount, self.decimals) {
            Ok(formatted) => write!(f, "{} {}", formatted, self.symbol),
            Err(_) => write!(f, "{} {} (smallest unit)", self.amount, self.symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, utils::parse_units};

    #[test]
    fn test_display_scales_by_decimals() {
        let hundred = parse_units("100", 18).unwrap().get_absolute();
        let balance = TokenBalance::new(
            hundred,
            18,
            "DAI".to_string(),
            Some(address!("6B175474E89094C44Da98b954EedeAC495271d0F")),
        );

        assert_eq!(balance.to_string(), "100.000000000000000000 DAI");
    }

    #[test]
    fn test_display_six_decimals() {
        let balance = TokenBalance::new(U256::from(1_500_000u64), 6, "USDC".to_string(), None);
        assert_eq!(balance.to_string(), "1.500000 USDC");
    }

    #[test]
    fn test_native_is_ether() {
        let balance = TokenBalance::native(U256::from(1u8));
        assert_eq!(balance.decimals, 18);
        assert_eq!(balance.symbol, "ETH");
        assert!(balance.address.is_none());
    }
}
