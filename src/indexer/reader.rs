//! Balance and history reads.
//!
//! Every read validates the chain against the registry before the request
//! is sent, and returns results in the order the service produced them.

use alloy::primitives::Address;

use crate::blockchain::chain::ChainId;
use crate::blockchain::units::{self, NATIVE_DECIMALS};
use crate::error::TrackerResult;
use crate::indexer::client::IndexerClient;
use crate::indexer::types::{
    NativeBalance, NativeBalanceResponse, TokenBalance, TokenBalanceEntry, TransactionRecord,
    WalletTransactionsResponse,
};

impl IndexerClient {
    /// Native balance of `address`, raw and scaled by 18 decimals.
    pub async fn get_native_balance(
        &self,
        address: Address,
        chain: ChainId,
    ) -> TrackerResult<NativeBalance> {
        let response: NativeBalanceResponse = self
            .get_json(&format!("{}/balance", address), &chain_query(chain))
            .await?;

        let formatted = units::format_raw_str(&response.balance, NATIVE_DECIMALS)?;
        Ok(NativeBalance {
            raw: response.balance,
            formatted,
        })
    }

    /// ERC-20 balances of `address`, each scaled by the token's own decimals.
    pub async fn get_token_balances(
        &self,
        address: Address,
        chain: ChainId,
    ) -> TrackerResult<Vec<TokenBalance>> {
        let entries: Vec<TokenBalanceEntry> = self
            .get_json(&format!("{}/erc20", address), &chain_query(chain))
            .await?;

        entries.into_iter().map(token_balance).collect()
    }

    /// Up to `limit` most recent native transactions of `address`.
    pub async fn get_transaction_history(
        &self,
        address: Address,
        chain: ChainId,
        limit: u32,
    ) -> TrackerResult<Vec<TransactionRecord>> {
        let mut query = chain_query(chain);
        query.push(("limit", limit.to_string()));

        let response: WalletTransactionsResponse =
            self.get_json(&address.to_string(), &query).await?;

        tracing::debug!(
            count = response.result.len(),
            has_more = response.cursor.is_some(),
            "Transaction page received"
        );

        Ok(response
            .result
            .into_iter()
            .take(limit as usize)
            .map(TransactionRecord::from)
            .collect())
    }
}

fn chain_query(chain: ChainId) -> Vec<(&'static str, String)> {
    vec![("chain", chain.as_str().to_string())]
}

fn token_balance(entry: TokenBalanceEntry) -> TrackerResult<TokenBalance> {
    // Tokens without usable decimals are scaled like the native currency.
    let decimals = entry
        .decimals
        .as_ref()
        .and_then(|d| d.as_u8())
        .unwrap_or(NATIVE_DECIMALS);
    let formatted = units::format_raw_str(&entry.balance, decimals)?;

    Ok(TokenBalance {
        token: entry.token_address,
        symbol: entry.symbol.unwrap_or_default(),
        decimals,
        raw: entry.balance,
        formatted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexer::types::NumberOrString;

    #[test]
    fn test_token_balance_uses_token_decimals() {
        let balance = token_balance(TokenBalanceEntry {
            token_address: "0xa0b8".to_string(),
            symbol: Some("USDC".to_string()),
            decimals: Some(NumberOrString::Number(6)),
            balance: "1234500".to_string(),
        })
        .unwrap();
        assert_eq!(balance.formatted, "1.2345");
        assert_eq!(balance.decimals, 6);
        assert_eq!(balance.raw, "1234500");
    }

    #[test]
    fn test_token_balance_without_decimals() {
        let balance = token_balance(TokenBalanceEntry {
            token_address: "0xdead".to_string(),
            symbol: None,
            decimals: None,
            balance: "1000000000000000000".to_string(),
        })
        .unwrap();
        assert_eq!(balance.formatted, "1.0");
        assert_eq!(balance.symbol, "");
    }

    #[test]
    fn test_malformed_balance_is_service_error() {
        let err = token_balance(TokenBalanceEntry {
            token_address: "0xdead".to_string(),
            symbol: None,
            decimals: None,
            balance: "lots".to_string(),
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("Indexing service error"));
    }
}
