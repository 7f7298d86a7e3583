//! Wallet resolution from the configured signing key.
//!
//! # Security
//! - The private key comes ONLY from the environment (via `AppConfig`)
//! - Keys are never logged, serialized or included in output records
//! - `Debug` shows the derived address only

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::config::loader::PRIVATE_KEY_ENV_VAR;
use crate::config::AppConfig;
use crate::error::{TrackerError, TrackerResult};

/// Signing identity derived from a private key.
#[derive(Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    pub fn from_private_key(private_key_hex: &str) -> TrackerResult<Self> {
        let key_hex = private_key_hex
            .trim()
            .strip_prefix("0x")
            .unwrap_or(private_key_hex.trim());

        // The parse error is dropped so the key material never reaches a message.
        let signer: PrivateKeySigner = key_hex.parse().map_err(|_| {
            TrackerError::Configuration(format!(
                "{} is not a valid secp256k1 private key",
                PRIVATE_KEY_ENV_VAR
            ))
        })?;

        tracing::debug!(address = %signer.address(), "Wallet initialized");

        Ok(Self { signer })
    }

    /// Build the wallet from the configured secret.
    pub fn from_config(config: &AppConfig) -> TrackerResult<Self> {
        let secret = config.secrets.private_key.as_ref().ok_or_else(|| {
            TrackerError::Configuration(format!(
                "{} environment variable is not set.",
                PRIVATE_KEY_ENV_VAR
            ))
        })?;

        Self::from_private_key(secret.expose())
    }

    /// Get the wallet's checksummed public address. Performs no network I/O.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Network wallet used by providers to sign outgoing transactions.
    pub(crate) fn network_wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .finish()
    }
}

/// Derive the public address of the configured wallet.
pub fn get_address(config: &AppConfig) -> TrackerResult<Address> {
    Ok(Wallet::from_config(config)?.address())
}
