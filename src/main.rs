//! solscope
//!
//! Read-only Solana wallet explorer: prints the SOL balance, fungible-token
//! holdings, and recent transaction signatures of a wallet address.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

use solscope::config::AppConfig;
use solscope::network::RpcClient;
use solscope::state::ViewState;
use solscope::telemetry::init_logging;
use solscope::utils::helpers::{format_sol, shorten_address, time_ago};
use solscope::utils::types::WalletSnapshot;
use solscope::wallet::WalletExplorer;

/// Read-only Solana wallet explorer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Wallet address to inspect
    address: String,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Override log level
    #[arg(long)]
    log_level: Option<String>,

    /// Emit JSON logs
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut config = AppConfig::load_or_default(&args.config)?;
    if let Some(level) = args.log_level {
        config.telemetry.log_level = level;
    }
    if args.json_logs {
        config.telemetry.json_logs = true;
    }

    init_logging(&config.telemetry)?;
    info!("solscope v{}", env!("CARGO_PKG_VERSION"));
    info!("rpc endpoint: {}", config.rpc.url);

    let rpc = Arc::new(RpcClient::new(&config.rpc)?);
    let explorer = WalletExplorer::new(rpc);

    let state = ViewState::new();
    state.set_address(&args.address);
    state.begin_lookup();

    match explorer.lookup(&state.address()).await {
        Ok(snapshot) => {
            state.complete(snapshot);
        }
        Err(err) => {
            state.fail();
            eprintln!("Error: {}", err);
            return Ok(ExitCode::FAILURE);
        }
    }

    if let Some(snapshot) = state.snapshot() {
        render(state.address().trim(), &snapshot);
    }

    Ok(ExitCode::SUCCESS)
}

fn render(address: &str, snapshot: &WalletSnapshot) {
    println!();
    println!("SOL Balance");
    println!("  {} SOL", format_sol(snapshot.balance));
    println!("  {}", shorten_address(address, 6));

    println!();
    println!("Tokens ({})", snapshot.tokens.len());
    for holding in &snapshot.tokens {
        println!("  {:<16} {}", shorten_address(&holding.mint, 6), holding.amount);
    }

    println!();
    println!("Recent Transactions ({})", snapshot.transactions.len());
    for tx in &snapshot.transactions {
        let status = if tx.succeeded { "ok" } else { "failed" };
        let age = tx
            .timestamp
            .map(time_ago)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<20} {:<7} {}",
            shorten_address(&tx.signature, 8),
            status,
            age
        );
    }
}
