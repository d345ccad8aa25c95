//! Native balance query

use serde::Deserialize;
use serde_json::json;

use crate::error::QueryError;
use crate::network::RpcCall;

/// Lamports per SOL
pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// `getBalance` response payload
#[derive(Debug, Deserialize)]
struct BalanceValue {
    value: u64,
}

/// Fetch the native balance for `address`, scaled to SOL.
pub(crate) async fn fetch(rpc: &dyn RpcCall, address: &str) -> Result<f64, QueryError> {
    let result = rpc.call("getBalance", json!([address])).await?;
    let balance: BalanceValue = serde_json::from_value(result)?;
    Ok(balance.value as f64 / LAMPORTS_PER_SOL)
}
