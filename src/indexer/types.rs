//! Indexing API wire shapes and the flat records built from them.

use serde::{Deserialize, Serialize};

/// `GET /{address}/balance` response.
#[derive(Debug, Clone, Deserialize)]
pub struct NativeBalanceResponse {
    /// Balance in wei, as a decimal integer string.
    pub balance: String,
}

/// One element of the `GET /{address}/erc20` response array.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenBalanceEntry {
    pub token_address: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub decimals: Option<NumberOrString>,
    pub balance: String,
}

/// `GET /{address}` response (native transaction page).
#[derive(Debug, Clone, Deserialize)]
pub struct WalletTransactionsResponse {
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub result: Vec<WalletTransactionEntry>,
}

/// One native transaction as returned by the indexing API.
#[derive(Debug, Clone, Deserialize)]
pub struct WalletTransactionEntry {
    pub hash: String,
    pub from_address: String,
    /// Absent for contract creations.
    #[serde(default)]
    pub to_address: Option<String>,
    pub value: String,
    pub block_number: String,
    pub block_timestamp: String,
    #[serde(default)]
    pub receipt_status: Option<String>,
}

/// The API reports some integers as JSON numbers and others as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(u64),
    Text(String),
}

impl NumberOrString {
    pub fn as_u8(&self) -> Option<u8> {
        match self {
            NumberOrString::Number(n) => u8::try_from(*n).ok(),
            NumberOrString::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Native balance in raw and human form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NativeBalance {
    /// Wei, as a decimal integer string.
    pub raw: String,
    /// Scaled by 18 decimals.
    pub formatted: String,
}

/// ERC-20 balance in raw and human form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenBalance {
    /// Token contract address.
    pub token: String,
    pub symbol: String,
    pub decimals: u8,
    pub raw: String,
    /// Scaled by the token's own decimals.
    pub formatted: String,
}

/// Execution outcome of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Success,
    Failed,
}

impl TxStatus {
    /// Receipt code `"1"` means success; anything else (including absent) means failure.
    pub fn from_receipt_code(code: Option<&str>) -> Self {
        match code {
            Some("1") => TxStatus::Success,
            _ => TxStatus::Failed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TxStatus::Success => "success",
            TxStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for TxStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A native transaction in flat form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    pub hash: String,
    pub from: String,
    /// Empty for contract creations.
    pub to: String,
    /// Wei, as a decimal integer string.
    pub value: String,
    pub block_number: String,
    pub timestamp: String,
    pub status: TxStatus,
}

impl From<WalletTransactionEntry> for TransactionRecord {
    fn from(entry: WalletTransactionEntry) -> Self {
        Self {
            status: TxStatus::from_receipt_code(entry.receipt_status.as_deref()),
            hash: entry.hash,
            from: entry.from_address,
            to: entry.to_address.unwrap_or_default(),
            value: entry.value,
            block_number: entry.block_number,
            timestamp: entry.block_timestamp,
        }
    }
}
