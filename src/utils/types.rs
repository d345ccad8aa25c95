//! Records produced by the wallet queries.
//!
//! These are transient display records: every lookup builds a fresh set and
//! the previous set is replaced wholesale.

use serde::{Deserialize, Serialize};

/// One fungible-token position owned by the queried address.
///
/// Only positions with a strictly positive amount are ever produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenHolding {
    /// Mint address identifying the token type
    pub mint: String,
    /// Balance in display units
    pub amount: f64,
}

/// A recent transaction involving the queried address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub signature: String,
    /// Block time in Unix seconds; None when the node has not resolved it
    pub timestamp: Option<i64>,
    pub succeeded: bool,
}

/// Combined result of one wallet lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    /// Native balance in SOL
    pub balance: f64,
    pub tokens: Vec<TokenHolding>,
    pub transactions: Vec<TransactionSummary>,
}
