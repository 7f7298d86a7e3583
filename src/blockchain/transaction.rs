//! Transfer execution and confirmation.
//!
//! # Responsibilities
//! - Validate recipient/token addresses before anything else
//! - Build and submit native and ERC-20 transfers
//! - Block until the transfer is confirmed on-chain
//!
//! A failed transfer is reported, never resubmitted: a resubmission could
//! send the funds twice.

use alloy::network::{Ethereum, TransactionBuilder};
use alloy::primitives::{Address, U256};
use alloy::providers::{PendingTransactionBuilder, Provider};
use alloy::rpc::types::TransactionRequest;

use crate::blockchain::client::SigningClient;
use crate::blockchain::erc20::IERC20;
use crate::blockchain::types::{parse_address, TransferResult};
use crate::blockchain::units;
use crate::blockchain::wallet::Wallet;
use crate::config::{AppConfig, TransferConfig};
use crate::error::{TrackerError, TrackerResult};

/// Submits transfers through a bound signing client.
pub struct TransferExecutor {
    client: SigningClient,
    config: TransferConfig,
}

impl TransferExecutor {
    /// Create a new transfer executor.
    pub fn new(client: SigningClient, config: TransferConfig) -> Self {
        Self { client, config }
    }

    /// Send `amount` (a decimal string in native units) to `to`.
    pub async fn send_native(&self, to: Address, amount: &str) -> TrackerResult<TransferResult> {
        let value = units::parse_native(amount)?;
        self.preflight().await?;

        let tx = TransactionRequest::default().with_to(to).with_value(value);
        let pending = self
            .client
            .provider()
            .send_transaction(tx)
            .await
            .map_err(|e| TrackerError::Transfer(e.to_string()))?;

        let hash = self.confirm(pending).await?;

        Ok(TransferResult {
            hash,
            from: self.client.address(),
            to,
            amount: format!("{} (native)", amount),
            token: None,
        })
    }

    /// Send `amount` (a decimal string in token units) of the ERC-20 at `token` to `to`.
    pub async fn send_token(
        &self,
        to: Address,
        amount: &str,
        token: Address,
    ) -> TrackerResult<TransferResult> {
        self.preflight().await?;

        let contract = IERC20::new(token, self.client.provider().clone());
        let decimals = contract.decimals().call().await.map_err(|e| {
            TrackerError::Transfer(format!("could not read decimals of {}: {}", token, e))
        })?;
        let value: U256 = units::parse_amount(amount, decimals)?;

        tracing::debug!(token = %token, decimals, raw_amount = %value, "Token amount scaled");

        let pending = contract
            .transfer(to, value)
            .send()
            .await
            .map_err(|e| TrackerError::Transfer(e.to_string()))?;

        let hash = self.confirm(pending).await?;

        Ok(TransferResult {
            hash,
            from: self.client.address(),
            to,
            amount: amount.to_string(),
            token: Some(token),
        })
    }

    /// Check the endpoint before spending anything.
    async fn preflight(&self) -> TrackerResult<()> {
        if self.config.verify_chain_id {
            self.client.verify_chain_id().await?;
        }
        Ok(())
    }

    /// Wait for the configured number of confirmations and check the receipt status.
    async fn confirm(
        &self,
        pending: PendingTransactionBuilder<Ethereum>,
    ) -> TrackerResult<alloy::primitives::TxHash> {
        let tx_hash = *pending.tx_hash();
        tracing::info!(
            tx_hash = %tx_hash,
            chain = %self.client.chain(),
            confirmations = self.config.confirmations,
            "Transaction submitted, waiting for confirmation"
        );

        let receipt = pending
            .with_required_confirmations(self.config.confirmations)
            .get_receipt()
            .await
            .map_err(|e| TrackerError::Transfer(format!("{} (tx {})", e, tx_hash)))?;

        if !receipt.status() {
            tracing::warn!(tx_hash = %tx_hash, block = ?receipt.block_number, "Transaction reverted");
            return Err(TrackerError::Transfer(format!(
                "transaction {} reverted",
                tx_hash
            )));
        }

        tracing::info!(
            tx_hash = %tx_hash,
            block = ?receipt.block_number,
            "Transaction confirmed"
        );
        Ok(receipt.transaction_hash)
    }
}

/// Transfer the native token.
///
/// Validation order: recipient address, chain, wallet, amount. Every
/// failure before submission happens without network I/O.
pub async fn transfer_native(
    config: &AppConfig,
    to: &str,
    amount: &str,
    chain: Option<&str>,
) -> TrackerResult<TransferResult> {
    let to = parse_address(to, "recipient")?;
    let executor = bind_executor(config, chain)?;
    executor.send_native(to, amount).await
}

/// Transfer an ERC-20 token.
///
/// The returned `amount` is the caller's string, unmodified.
pub async fn transfer_token(
    config: &AppConfig,
    to: &str,
    amount: &str,
    token: &str,
    chain: Option<&str>,
) -> TrackerResult<TransferResult> {
    let to = parse_address(to, "recipient")?;
    let token = parse_address(token, "token contract")?;
    let executor = bind_executor(config, chain)?;
    executor.send_token(to, amount, token).await
}

fn bind_executor(config: &AppConfig, chain: Option<&str>) -> TrackerResult<TransferExecutor> {
    let chain = config.resolve_chain(chain)?;
    let wallet = Wallet::from_config(config)?;
    let client = SigningClient::connect(wallet, chain)?;
    Ok(TransferExecutor::new(client, config.transfer.clone()))
}
