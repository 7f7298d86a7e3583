//! Transfer records and address validation.

use alloy::primitives::{Address, TxHash};
use serde::Serialize;

use crate::error::{TrackerError, TrackerResult};

/// Outcome of a confirmed transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferResult {
    /// Hash of the confirmed transaction.
    pub hash: TxHash,
    /// Sending wallet address.
    pub from: Address,
    /// Recipient address.
    pub to: Address,
    /// Human-readable amount as supplied by the caller.
    pub amount: String,
    /// Token contract, for ERC-20 transfers.
    pub token: Option<Address>,
}

/// Parse a 20-byte hex address, with or without the `0x` prefix.
///
/// Mixed-case input must carry a valid EIP-55 checksum; all-lowercase and
/// all-uppercase input is accepted as is. `role` names the address in the
/// error message ("recipient", "token contract", "account").
pub fn parse_address(raw: &str, role: &'static str) -> TrackerResult<Address> {
    let invalid = || TrackerError::InvalidAddress {
        role,
        address: raw.to_string(),
    };

    let hex = raw.strip_prefix("0x").unwrap_or(raw);
    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let prefixed = format!("0x{}", hex);
    let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        Address::parse_checksummed(&prefixed, None).map_err(|_| invalid())
    } else {
        prefixed.parse().map_err(|_| invalid())
    }
}
