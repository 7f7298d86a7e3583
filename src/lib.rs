//! Crypto tracker & transfer library.
//!
//! Checks balances, reads transaction history and sends native or ERC-20
//! transfers from a single private-key-derived wallet, on top of a public
//! EVM JSON-RPC node aggregator and a blockchain-data indexing API.

pub mod blockchain;
pub mod cli;
pub mod config;
pub mod error;
pub mod indexer;
pub mod observability;

pub use cli::{Dispatcher, Invocation};
pub use config::AppConfig;
pub use error::{TrackerError, TrackerResult};
