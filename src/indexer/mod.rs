//! Blockchain-data indexing subsystem.
//!
//! # Data Flow
//! ```text
//! AppConfig (API key from environment, base URL)
//!     → client.rs (HTTP handle, built once per process)
//!     → reader.rs (native balance, token balances, history)
//!     → types.rs (wire shapes → flat records)
//! ```

pub mod client;
pub mod reader;
pub mod types;

pub use client::IndexerClient;
pub use types::{NativeBalance, TokenBalance, TransactionRecord, TxStatus};
