mod info;
mod token;

use super::parsers::*;
use alloy::primitives::Address;
use clap::Subcommand;

// https://docs.rs/clap/latest/clap/_derive/index.html#arg-attributes
#[derive(Subcommand)]
pub enum Commands {
    /// See the chain, block heights and token of the fork.
    Info,
    /// See native & token balances of the given addresses.
    Balance {
        #[arg(
            help = "Addresses to query, defaults to the whale and your wallet.",
            value_parser = parse_address
        )]
        addresses: Vec<Address>,
    },
    /// Transfer tokens out of the whale by impersonating it.
    Transfer {
        #[arg(
            long,
            help = "Recipient address, defaults to your wallet.",
            value_parser = parse_address
        )]
        to: Option<Address>,
        #[arg(
            help = "Amount in whole tokens, scaled by the token decimals.",
            default_value = "100"
        )]
        amount: String,
    },
}
