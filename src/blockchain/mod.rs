//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! AppConfig (private key from environment)
//!     → wallet.rs (key loading, address derivation)
//!     → chain.rs (chain identifier → RPC endpoint)
//!     → client.rs (wallet bound to endpoint)
//!     → transaction.rs (build, sign, broadcast, confirm)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - Unknown chains are rejected before any RPC call
//! - Transfers are never retried

pub mod chain;
pub mod client;
pub mod erc20;
pub mod transaction;
pub mod types;
pub mod units;
pub mod wallet;

pub use chain::{resolve_endpoint, ChainId};
pub use client::SigningClient;
pub use transaction::{transfer_native, transfer_token, TransferExecutor};
pub use types::TransferResult;
pub use wallet::{get_address, Wallet};
