use alloy::sol;

sol! {
    /// The slice of the ERC-20 surface the harness touches: one read, one
    /// write, the decimal count, and the event the write emits.
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
        function decimals() external view returns (uint8);

        event Transfer(address indexed from, address indexed to, uint256 value);
    }
}
