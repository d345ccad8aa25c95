//! Read-only Solana wallet explorer.
//!
//! Queries a JSON-RPC endpoint for an address's native SOL balance,
//! fungible-token holdings, and recent transaction signatures, and
//! normalizes the responses into plain records for display.

pub mod config;
pub mod error;
pub mod network;
pub mod state;
pub mod telemetry;
pub mod utils;
pub mod wallet;

// Re-export main types
pub use config::AppConfig;
pub use error::QueryError;
pub use network::{RpcCall, RpcClient};
pub use state::ViewState;
pub use utils::types::{TokenHolding, TransactionSummary, WalletSnapshot};
pub use wallet::WalletExplorer;
