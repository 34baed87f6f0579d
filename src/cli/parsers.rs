use crate::configurations::fork_block_or_default;
use alloy::{
    hex::FromHex,
    primitives::{Address, B256},
    transports::http::reqwest::Url,
};
use eyre::Result;
use std::str::FromStr;

/// `value_parser` to parse a `str` to `Url`.
pub fn parse_url(value: &str) -> Result<Url> {
    Url::parse(value).map_err(Into::into)
}

/// `value_parser` to parse a `str` to `Address`.
pub fn parse_address(value: &str) -> Result<Address> {
    Address::from_str(value).map_err(Into::into)
}

/// `value_parser` to parse a hexadecimal `str` to 256-bit type `B256`.
pub fn parse_secret_key(value: &str) -> Result<B256> {
    B256::from_hex(value).map_err(Into::into)
}

/// `value_parser` to parse a `str` to a fork height.
///
/// Never fails: empty or non-decimal values fall back to the default height,
/// so a blank `FORK_BLOCK_NUMBER` behaves the same as an absent one.
pub fn parse_fork_block(value: &str) -> Result<u64> {
    Ok(fork_block_or_default(Some(value.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_FORK_BLOCK;

    #[test]
    fn test_parse_url() {
        let url_str = "https://example.com";
        let result = parse_url(url_str);
        assert!(result.is_ok());
        let url = result.unwrap();
        assert_eq!(url, Url::parse(url_str).unwrap());
    }

    #[test]
    fn test_parse_address() {
        let addr_str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
        let result = parse_address(addr_str);
        assert!(result.is_ok());
        let address = result.unwrap();
        assert_eq!(address, Address::from_str(addr_str).unwrap());

        assert!(parse_address("not-an-address").is_err());
    }

    #[test]
    fn test_parse_secret_key() {
        let hex_str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";
        let result = parse_secret_key(hex_str);
        assert!(result.is_ok());

        let secret_key = result.unwrap();
        assert_eq!(secret_key, B256::from_hex(hex_str).unwrap());
    }

    #[test]
    fn test_parse_fork_block() {
        let result = parse_fork_block("12345");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 12345);

        // lenient inputs all land on the default height
        assert_eq!(parse_fork_block("").unwrap(), DEFAULT_FORK_BLOCK);
        assert_eq!(parse_fork_block("latest").unwrap(), DEFAULT_FORK_BLOCK);
    }
}
