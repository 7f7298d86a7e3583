//! Minimal ERC-20 contract bindings.

use alloy::sol;

sol! {
    /// Only the calls needed for transfers: `decimals` and `transfer`.
    #[sol(rpc)]
    interface IERC20 {
        function decimals() external view returns (uint8);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}
