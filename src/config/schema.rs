//! Configuration schema definitions.
//!
//! File-backed sections derive Serde traits for deserialization from TOML.
//! Secrets come from the environment only and are never (de)serialized.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::blockchain::chain::ChainId;
use crate::error::{TrackerError, TrackerResult};

/// Root configuration for the tracker.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults applied when a command omits a flag.
    pub defaults: DefaultsConfig,

    /// Indexing API settings.
    pub indexer: IndexerConfig,

    /// Transfer submission settings.
    pub transfer: TransferConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Environment-provided secrets.
    #[serde(skip)]
    pub secrets: Secrets,
}

impl AppConfig {
    /// Resolve the target chain: explicit flag first, then the configured default.
    pub fn resolve_chain(&self, flag: Option<&str>) -> TrackerResult<ChainId> {
        flag.unwrap_or(&self.defaults.chain).parse()
    }

    /// Resolve the history page size: explicit flag first, then the configured default.
    pub fn resolve_limit(&self, flag: Option<&str>) -> TrackerResult<u32> {
        match flag {
            None => Ok(self.defaults.history_limit),
            Some(raw) => match raw.parse::<u32>() {
                Ok(limit) if limit > 0 => Ok(limit),
                _ => Err(TrackerError::Usage(format!(
                    "--limit must be a positive integer, got \"{}\"",
                    raw
                ))),
            },
        }
    }
}

/// Command defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Chain used when `--chain` is absent.
    pub chain: String,

    /// Number of transactions fetched by `history` when `--limit` is absent.
    pub history_limit: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            chain: ChainId::Eth.as_str().to_string(),
            history_limit: 20,
        }
    }
}

/// Indexing API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IndexerConfig {
    /// Base URL of the indexing REST API.
    pub base_url: String,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://deep-index.moralis.io/api/v2.2".to_string(),
        }
    }
}

/// Transfer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TransferConfig {
    /// Number of block confirmations to wait for after inclusion.
    pub confirmations: u64,

    /// Check the endpoint's chain id before submitting.
    pub verify_chain_id: bool,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            confirmations: 1,
            verify_chain_id: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Secrets read from the environment.
#[derive(Debug, Clone, Default)]
pub struct Secrets {
    /// Signing key (`PRIVATE_KEY`).
    pub private_key: Option<SecretString>,

    /// Indexing API credential (`MORALIS_API_KEY`).
    pub indexer_api_key: Option<SecretString>,
}

/// String whose value never appears in `Debug` output.
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the secret value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}
