//! Command routing.
//!
//! # Responsibilities
//! - Map the parsed invocation to a command
//! - Resolve defaults (target address, chain, limit) in one place
//! - Build the indexing client only for commands that read from it
//! - Write human-readable output; errors bubble up to the binary

use std::io::Write;

use alloy::primitives::Address;

use crate::blockchain::types::parse_address;
use crate::blockchain::{self, Wallet};
use crate::cli::args::{FlagValue, Invocation};
use crate::cli::output;
use crate::config::AppConfig;
use crate::error::{TrackerError, TrackerResult};
use crate::indexer::IndexerClient;

/// Supported commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Address,
    Balance,
    History,
    Transfer,
    /// Absent or unknown command.
    Usage,
}

impl Command {
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("address") => Command::Address,
            Some("balance") => Command::Balance,
            Some("history") => Command::History,
            Some("transfer") => Command::Transfer,
            _ => Command::Usage,
        }
    }
}

/// Routes invocations to the wallet, reader and transfer components.
#[derive(Debug)]
pub struct Dispatcher {
    config: AppConfig,
    indexer: Option<IndexerClient>,
}

impl Dispatcher {
    /// The indexing client is built on first use, so commands that never
    /// read from it do not require an API key.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            indexer: None,
        }
    }

    /// Use an already constructed indexing client.
    pub fn with_indexer(config: AppConfig, indexer: IndexerClient) -> Self {
        Self {
            config,
            indexer: Some(indexer),
        }
    }

    /// Execute one invocation, writing its output to `out`.
    pub async fn run<W: Write>(&self, inv: &Invocation, out: &mut W) -> TrackerResult<()> {
        let command = Command::from_name(inv.command.as_deref());
        tracing::debug!(?command, "Dispatching");

        match command {
            Command::Address => {
                let address = blockchain::get_address(&self.config)?;
                out.write_all(output::render_address(address).as_bytes())?;
            }
            Command::Balance => self.balance(inv, out).await?,
            Command::History => self.history(inv, out).await?,
            Command::Transfer => self.transfer(inv, out).await?,
            Command::Usage => writeln!(out, "{}", output::USAGE)?,
        }
        Ok(())
    }

    async fn balance<W: Write>(&self, inv: &Invocation, out: &mut W) -> TrackerResult<()> {
        let address = self.target_address(inv)?;
        let chain = self.config.resolve_chain(valued_flag(inv, "chain")?)?;
        let indexer = self.indexer()?;

        out.write_all(output::balance_header(address, chain).as_bytes())?;
        let native = indexer.get_native_balance(address, chain).await?;
        let tokens = indexer.get_token_balances(address, chain).await?;
        out.write_all(output::render_balances(&native, chain, &tokens).as_bytes())?;
        Ok(())
    }

    async fn history<W: Write>(&self, inv: &Invocation, out: &mut W) -> TrackerResult<()> {
        let address = self.target_address(inv)?;
        let chain = self.config.resolve_chain(valued_flag(inv, "chain")?)?;
        let limit = self.config.resolve_limit(valued_flag(inv, "limit")?)?;
        let indexer = self.indexer()?;

        out.write_all(output::history_header(limit, address, chain).as_bytes())?;
        let txs = indexer.get_transaction_history(address, chain, limit).await?;
        out.write_all(output::render_history(&txs).as_bytes())?;
        Ok(())
    }

    async fn transfer<W: Write>(&self, inv: &Invocation, out: &mut W) -> TrackerResult<()> {
        let (Some(to), Some(amount)) = (inv.flag_str("to"), inv.flag_str("amount")) else {
            return Err(TrackerError::Usage(
                "--to and --amount are required for transfer.".to_string(),
            ));
        };
        let chain = valued_flag(inv, "chain")?;

        let result = match valued_flag(inv, "token")? {
            None => {
                out.write_all(output::native_transfer_header(amount, to).as_bytes())?;
                blockchain::transfer_native(&self.config, to, amount, chain).await?
            }
            Some(token) => {
                out.write_all(output::token_transfer_header(amount, token, to).as_bytes())?;
                blockchain::transfer_token(&self.config, to, amount, token, chain).await?
            }
        };

        out.write_all(output::render_transfer(&result).as_bytes())?;
        Ok(())
    }

    fn indexer(&self) -> TrackerResult<IndexerClient> {
        match &self.indexer {
            Some(client) => Ok(client.clone()),
            None => IndexerClient::new(&self.config),
        }
    }

    /// First positional argument, or the configured wallet's own address.
    fn target_address(&self, inv: &Invocation) -> TrackerResult<Address> {
        match inv.positional(0) {
            Some(raw) => parse_address(raw, "account"),
            None => Ok(Wallet::from_config(&self.config)?.address()),
        }
    }
}

/// Value of an optional flag. A flag given without a value is a usage error
/// rather than a silent fallback to the default.
fn valued_flag<'a>(inv: &'a Invocation, name: &str) -> TrackerResult<Option<&'a str>> {
    match inv.flag(name) {
        None => Ok(None),
        Some(FlagValue::Value(v)) => Ok(Some(v.as_str())),
        Some(FlagValue::Switch) => Err(TrackerError::Usage(format!(
            "--{} requires a value.",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SecretString;

    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    async fn run(config: AppConfig, args: &[&str]) -> (TrackerResult<()>, String) {
        let dispatcher = Dispatcher::new(config);
        let mut out = Vec::new();
        let result = dispatcher.run(&Invocation::parse(args.iter().copied()), &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    fn config_with_key() -> AppConfig {
        let mut config = AppConfig::default();
        config.secrets.private_key = Some(SecretString::new(TEST_PRIVATE_KEY));
        config
    }

    #[test]
    fn test_command_from_name() {
        assert_eq!(Command::from_name(Some("balance")), Command::Balance);
        assert_eq!(Command::from_name(Some("Balance")), Command::Usage);
        assert_eq!(Command::from_name(None), Command::Usage);
    }

    #[tokio::test]
    async fn test_address_command() {
        let (result, out) = run(config_with_key(), &["address"]).await;
        result.unwrap();
        assert_eq!(out, "Wallet address: 0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266\n");
    }

    #[tokio::test]
    async fn test_unknown_command_prints_usage() {
        for args in [&["frobnicate"][..], &[][..]] {
            let (result, out) = run(AppConfig::default(), args).await;
            assert!(result.is_ok());
            assert!(out.contains("Crypto Tracker & Transfer CLI"));
        }
    }

    #[tokio::test]
    async fn test_transfer_requires_to_and_amount() {
        for args in [
            &["transfer", "--amount", "1"][..],
            &["transfer", "--to", "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"][..],
            &["transfer", "--to", "--amount", "1"][..],
        ] {
            let (result, out) = run(config_with_key(), args).await;
            let err = result.unwrap_err();
            assert!(matches!(err, TrackerError::Usage(_)));
            assert_eq!(err.to_string(), "--to and --amount are required for transfer.");
            assert!(out.is_empty(), "nothing may be attempted: {out}");
        }
    }

    #[tokio::test]
    async fn test_transfer_token_switch_without_value() {
        let (result, _) = run(
            config_with_key(),
            &["transfer", "--to", "0xR", "--amount", "1", "--token"],
        )
        .await;
        let err = result.unwrap_err();
        assert!(matches!(err, TrackerError::Usage(_)));
        assert_eq!(err.to_string(), "--token requires a value.");
    }

    #[tokio::test]
    async fn test_balance_requires_api_key() {
        let (result, out) = run(config_with_key(), &["balance"]).await;
        assert!(result.unwrap_err().to_string().contains("MORALIS_API_KEY"));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_balance_rejects_bad_account_and_chain() {
        let mut config = config_with_key();
        config.secrets.indexer_api_key = Some(SecretString::new("key"));

        let (result, _) = run(config.clone(), &["balance", "0xABC"]).await;
        assert_eq!(result.unwrap_err().to_string(), "Invalid account address: 0xABC");

        let (result, _) = run(config, &["history", "--chain", "solana"]).await;
        assert!(matches!(result.unwrap_err(), TrackerError::UnsupportedChain { .. }));
    }

    #[tokio::test]
    async fn test_bare_chain_and_limit_flags_are_usage_errors() {
        let mut config = config_with_key();
        config.secrets.indexer_api_key = Some(SecretString::new("key"));

        for (args, message) in [
            (&["balance", "--chain"][..], "--chain requires a value."),
            (&["history", "--chain"][..], "--chain requires a value."),
            (&["history", "--limit"][..], "--limit requires a value."),
            (&["history", "--limit", "--chain", "bsc"][..], "--limit requires a value."),
            (
                &[
                    "transfer",
                    "--to",
                    "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
                    "--amount",
                    "1",
                    "--chain",
                ][..],
                "--chain requires a value.",
            ),
        ] {
            let (result, out) = run(config.clone(), args).await;
            let err = result.unwrap_err();
            assert!(matches!(err, TrackerError::Usage(_)), "{args:?}");
            assert_eq!(err.to_string(), message);
            assert!(out.is_empty(), "nothing may be attempted: {out}");
        }
    }

    #[tokio::test]
    async fn test_history_rejects_bad_limit() {
        let mut config = config_with_key();
        config.secrets.indexer_api_key = Some(SecretString::new("key"));
        let (result, _) = run(config, &["history", "--limit", "lots"]).await;
        assert!(matches!(result.unwrap_err(), TrackerError::Usage(_)));
    }
}
