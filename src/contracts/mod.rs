mod addresses;
pub use addresses::{ForkAddresses, ADDRESSES};

mod balance;
pub use balance::TokenBalance;

mod interfaces;
pub use interfaces::IERC20;
