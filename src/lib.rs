#[cfg(feature = "anvil")]
mod cli;
#[cfg(feature = "anvil")]
pub use cli::cli;

mod configurations;
pub use configurations::{ForkliftConfig, DEFAULT_FORK_BLOCK};

mod contracts;
pub use contracts::{ForkAddresses, TokenBalance, ADDRESSES, IERC20};

mod node;
pub use node::Forklift;
