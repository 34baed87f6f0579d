mod commands;
use commands::Commands;

mod parsers;
use parsers::*;

use crate::{Forklift, ForkliftConfig};
use alloy::{primitives::B256, transports::http::reqwest::Url};
use clap::Parser;
use eyre::{Context, Result};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC URL of the chain whose state is forked.
    #[arg(short, long, env = "RPC_URL", value_parser = parse_url)]
    rpc_url: Url,

    /// Block height to fork at.
    #[arg(
        short,
        long,
        env = "FORK_BLOCK_NUMBER",
        value_parser = parse_fork_block,
        default_value = ""
    )]
    fork_block: u64,

    /// Secret key overriding the built-in development wallet.
    #[arg(short, long, env = "SECRET_KEY", value_parser = parse_secret_key)]
    secret_key: Option<B256>,
}

/// Main CLI entry point.
pub async fn cli() -> Result<()> {
    // default commands such as version and help exit at this point,
    // so we can do the fork setup after this line
    let cli = Cli::parse();

    let mut config = ForkliftConfig::new(cli.rpc_url).with_fork_block(cli.fork_block);
    if let Some(secret_key) = cli.secret_key {
        config = config
            .with_secret_key(&secret_key)
            .wrap_err("could not create a wallet from the given secret key")?;
    }

    // the fork lives as long as this instance does
    let (node, _anvil) = Forklift::fork(config)
        .await
        .wrap_err("could not fork the configured chain")?;
    log::info!("{}", node);
    log::info!("{}", node.addresses);

    match cli.command {
        Commands::Info => node.display_info().await?,
        Commands::Balance { addresses } => {
            let addresses = if addresses.is_empty() {
                vec![node.addresses.whale, node.address()]
            } else {
                addresses
            };
            node.display_balances(&addresses).await?
        }
        Commands::Transfer { to, amount } => {
            let to = to.unwrap_or_else(|| node.address());
            node.transfer_from_whale(to, &amount).await?
        }
    };

    Ok(())
}
