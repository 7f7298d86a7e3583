//! Error taxonomy shared by every subsystem.
//!
//! Nothing is retried internally: each error surfaces to the dispatcher,
//! which prints the message and exits non-zero.

use thiserror::Error;

/// Errors that can occur while tracking balances or sending transfers.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// A required setting (secret, API key) is missing or invalid.
    #[error("{0}")]
    Configuration(String),

    /// Chain identifier is not in the endpoint registry.
    #[error("Unsupported chain \"{chain}\". Choose from: {supported}")]
    UnsupportedChain { chain: String, supported: String },

    /// Malformed recipient, token or account address.
    #[error("Invalid {role} address: {address}")]
    InvalidAddress { role: &'static str, address: String },

    /// Amount could not be scaled to the smallest unit.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Missing or malformed command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// Indexing API request failed.
    #[error("Indexing service error: {0}")]
    Service(String),

    /// The RPC endpoint serves a different chain than the registry says.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// Submission or confirmation of a transfer failed.
    #[error("Transfer failed: {0}")]
    Transfer(String),

    /// Writing command output failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type used across the crate.
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::InvalidAddress {
            role: "recipient",
            address: "0xnope".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid recipient address: 0xnope");

        let err = TrackerError::ChainMismatch {
            expected: 137,
            actual: 1,
        };
        assert!(err.to_string().contains("137"));

        let err = TrackerError::Transfer("insufficient funds".to_string());
        assert_eq!(err.to_string(), "Transfer failed: insufficient funds");
    }
}
