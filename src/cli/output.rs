//! Text rendering for command results.

use std::fmt::Write;

use alloy::primitives::Address;

use crate::blockchain::chain::ChainId;
use crate::blockchain::types::TransferResult;
use crate::indexer::types::{NativeBalance, TokenBalance, TransactionRecord};

pub const USAGE: &str = "
Crypto Tracker & Transfer CLI
==============================

Commands:
  address                              Show wallet address derived from PRIVATE_KEY
  balance [address]                    Show native + ERC-20 token balances
  history [address] [--limit N]        Show transaction history  (default limit: 20)
  transfer --to <addr> --amount <amt>  Transfer native token (ETH, MATIC …)
           [--token <contract>]         Optionally transfer an ERC-20 token instead
           [--chain <chain>]            Override chain (eth | polygon | bsc | …)

Environment variables (copy .env.example → .env and fill in):
  PRIVATE_KEY            MetaMask / EOA private key (keep secret!)
  MORALIS_API_KEY        Your Moralis Web3 API key
  CHAIN                  Default chain (default: eth)
  CRYPTO_TRACKER_CONFIG  Optional TOML config file
";

pub fn render_address(address: Address) -> String {
    format!("Wallet address: {}\n", address)
}

pub fn balance_header(address: Address, chain: ChainId) -> String {
    format!("\nFetching balances for {} on {}…\n\n", address, chain)
}

pub fn render_balances(native: &NativeBalance, chain: ChainId, tokens: &[TokenBalance]) -> String {
    let mut out = format!(
        "Native balance : {} {}\n",
        native.formatted,
        chain.native_symbol()
    );

    if tokens.is_empty() {
        out.push_str("No ERC-20 tokens found.\n");
    } else {
        out.push_str("\nERC-20 tokens:\n");
        for t in tokens {
            let _ = writeln!(out, "  {:<10} {}  ({})", t.symbol, t.formatted, t.token);
        }
    }
    out
}

pub fn history_header(limit: u32, address: Address, chain: ChainId) -> String {
    format!(
        "\nFetching last {} transactions for {} on {}…\n\n",
        limit, address, chain
    )
}

pub fn render_history(txs: &[TransactionRecord]) -> String {
    if txs.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut out = String::new();
    for tx in txs {
        let _ = writeln!(out, "[{}] {}", tx.timestamp, tx.status.as_str().to_uppercase());
        let _ = writeln!(out, "  Hash  : {}", tx.hash);
        let _ = writeln!(out, "  From  : {}", tx.from);
        let _ = writeln!(out, "  To    : {}", tx.to);
        let _ = writeln!(out, "  Value : {} wei\n", tx.value);
    }
    out
}

pub fn native_transfer_header(amount: &str, to: &str) -> String {
    format!("\nTransferring {} native token to {}…\n", amount, to)
}

pub fn token_transfer_header(amount: &str, token: &str, to: &str) -> String {
    format!("\nTransferring {} of token {} to {}…\n", amount, token, to)
}

pub fn render_transfer(result: &TransferResult) -> String {
    let mut out = String::from("\nTransfer successful!\n");
    let _ = writeln!(out, "  TX hash : {}", result.hash);
    let _ = writeln!(out, "  From    : {}", result.from);
    let _ = writeln!(out, "  To      : {}", result.to);
    match result.token {
        Some(token) => {
            let _ = writeln!(out, "  Amount  : {} {}", result.amount, token);
        }
        None => {
            let _ = writeln!(out, "  Amount  : {}", result.amount);
        }
    }
    out
}
