//! Crypto Tracker & Transfer CLI
//!
//! # Architecture Overview
//!
//! ```text
//!   argv ──▶ cli::args ──▶ cli::dispatch ──┬──▶ blockchain::wallet       (address)
//!                                          ├──▶ indexer::reader         (balance, history) ──▶ indexing API
//!                                          └──▶ blockchain::transaction (transfer)         ──▶ JSON-RPC node
//!
//!   .env / CRYPTO_TRACKER_CONFIG / environment ──▶ config ──▶ AppConfig (passed to every command)
//! ```
//!
//! Exit code 0 on success or usage display, 1 on any error.

use std::process::ExitCode;

use crypto_tracker::cli::{Dispatcher, Invocation};
use crypto_tracker::config;
use crypto_tracker::observability::logging::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // A missing .env file is fine; the environment may already be populated.
    let _ = dotenvy::dotenv();

    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.observability);
    tracing::debug!(default_chain = %config.defaults.chain, "Configuration loaded");

    let invocation = Invocation::parse(std::env::args().skip(1));
    let dispatcher = Dispatcher::new(config);
    let mut stdout = std::io::stdout();

    match dispatcher.run(&invocation, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
