//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (optional, loaded by the binary)
//! config file (TOML, optional, named by CRYPTO_TRACKER_CONFIG)
//!     → loader.rs (parse & deserialize, overlay environment)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → passed by reference to every command
//! ```
//!
//! # Design Decisions
//! - Config is built once per process and never mutated afterwards
//! - All fields have defaults to allow running without a file
//! - Chain and history-limit defaults live only in `DefaultsConfig`
//! - Secrets are read from the environment only

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_from_env, ConfigError};
pub use schema::AppConfig;
pub use schema::{DefaultsConfig, IndexerConfig, ObservabilityConfig, SecretString, TransferConfig};
