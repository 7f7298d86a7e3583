//! Chain endpoint registry.
//!
//! # Responsibilities
//! - Map chain identifiers to public RPC endpoints
//! - Reject unknown identifiers before any network call
//! - Carry per-chain metadata (EVM chain id, native symbol)

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{TrackerError, TrackerResult};

/// Base URL of the public node aggregator serving every supported chain.
const RPC_BASE_URL: &str = "https://site1.moralis-nodes.com";

/// Supported networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainId {
    Eth,
    Polygon,
    Bsc,
    Avalanche,
    Arbitrum,
    Optimism,
    Fantom,
    Cronos,
}

impl ChainId {
    /// Every supported chain, in registry order.
    pub const ALL: [ChainId; 8] = [
        ChainId::Eth,
        ChainId::Polygon,
        ChainId::Bsc,
        ChainId::Avalanche,
        ChainId::Arbitrum,
        ChainId::Optimism,
        ChainId::Fantom,
        ChainId::Cronos,
    ];

    /// Identifier used on the command line and by the indexing API.
    pub fn as_str(self) -> &'static str {
        match self {
            ChainId::Eth => "eth",
            ChainId::Polygon => "polygon",
            ChainId::Bsc => "bsc",
            ChainId::Avalanche => "avalanche",
            ChainId::Arbitrum => "arbitrum",
            ChainId::Optimism => "optimism",
            ChainId::Fantom => "fantom",
            ChainId::Cronos => "cronos",
        }
    }

    /// EIP-155 chain id served by the endpoint.
    pub fn evm_chain_id(self) -> u64 {
        match self {
            ChainId::Eth => 1,
            ChainId::Polygon => 137,
            ChainId::Bsc => 56,
            ChainId::Avalanche => 43114,
            ChainId::Arbitrum => 42161,
            ChainId::Optimism => 10,
            ChainId::Fantom => 250,
            ChainId::Cronos => 25,
        }
    }

    /// Symbol of the native currency.
    pub fn native_symbol(self) -> &'static str {
        match self {
            ChainId::Eth | ChainId::Arbitrum | ChainId::Optimism => "ETH",
            ChainId::Polygon => "MATIC",
            ChainId::Bsc => "BNB",
            ChainId::Avalanche => "AVAX",
            ChainId::Fantom => "FTM",
            ChainId::Cronos => "CRO",
        }
    }

    /// HTTPS JSON-RPC endpoint for this chain.
    pub fn rpc_url(self) -> TrackerResult<Url> {
        let raw = format!("{}/{}", RPC_BASE_URL, self.as_str());
        raw.parse().map_err(|e| {
            TrackerError::Configuration(format!("Invalid RPC URL '{}': {}", raw, e))
        })
    }

    /// Comma-separated list of supported identifiers.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for ChainId {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| TrackerError::UnsupportedChain {
                chain: s.to_string(),
                supported: Self::supported_list(),
            })
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a chain identifier string to its RPC endpoint.
pub fn resolve_endpoint(chain: &str) -> TrackerResult<Url> {
    chain.parse::<ChainId>()?.rpc_url()
}
