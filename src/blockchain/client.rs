//! Endpoint-bound signing client.
//!
//! # Responsibilities
//! - Bind a wallet to a chain's JSON-RPC endpoint
//! - Verify the endpoint serves the expected chain before submissions
//! - Expose the provider to the transfer executor

use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::transports::http::Http;
use url::Url;

use crate::blockchain::chain::ChainId;
use crate::blockchain::wallet::Wallet;
use crate::error::{TrackerError, TrackerResult};

/// A wallet bound to an RPC endpoint, able to submit transactions.
#[derive(Clone)]
pub struct SigningClient {
    provider: DynProvider,
    wallet: Wallet,
    chain: ChainId,
}

impl SigningClient {
    /// Bind `wallet` to the endpoint registered for `chain`.
    ///
    /// No network I/O happens here; the first call is made by whoever uses the client.
    pub fn connect(wallet: Wallet, chain: ChainId) -> TrackerResult<Self> {
        let url = chain.rpc_url()?;
        Ok(Self::connect_with(wallet, chain, url, reqwest::Client::new()))
    }

    /// Bind `wallet` to an explicit endpoint using the given HTTP client.
    ///
    /// `chain` is still the chain the endpoint is expected to serve.
    pub fn connect_with(wallet: Wallet, chain: ChainId, url: Url, http: reqwest::Client) -> Self {
        let transport = Http::with_client(http, url);
        let is_local = transport.guess_local();
        let provider = ProviderBuilder::new()
            .wallet(wallet.network_wallet())
            .connect_client(RpcClient::new(transport, is_local))
            .erased();

        tracing::debug!(
            chain = %chain,
            address = %wallet.address(),
            local = is_local,
            "Signing client bound to endpoint"
        );

        Self {
            provider,
            wallet,
            chain,
        }
    }

    /// Get the chain ID reported by the endpoint.
    pub async fn get_chain_id(&self) -> TrackerResult<u64> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| TrackerError::Transfer(format!("RPC error: {}", e)))
    }

    /// Verify the connected chain ID matches the registry.
    pub async fn verify_chain_id(&self) -> TrackerResult<()> {
        let actual = self.get_chain_id().await?;
        let expected = self.chain.evm_chain_id();
        if actual != expected {
            return Err(TrackerError::ChainMismatch { expected, actual });
        }
        Ok(())
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Get the sending address.
    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    /// Get the chain this client is bound to.
    pub fn chain(&self) -> ChainId {
        self.chain
    }
}

impl std::fmt::Debug for SigningClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningClient")
            .field("chain", &self.chain)
            .field("address", &self.wallet.address())
            .finish()
    }
}
