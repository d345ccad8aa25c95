//! Transaction history query

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::QueryError;
use crate::network::RpcCall;
use crate::utils::types::TransactionSummary;

/// Fixed signature window
pub const SIGNATURE_LIMIT: usize = 10;

/// One entry of the `getSignaturesForAddress` response
#[derive(Debug, Deserialize)]
struct SignatureEntry {
    signature: String,
    #[serde(rename = "blockTime")]
    block_time: Option<i64>,
    err: Option<Value>,
}

/// Fetch the most recent signatures for `address`, preserving the node's
/// recency order.
pub(crate) async fn fetch(
    rpc: &dyn RpcCall,
    address: &str,
) -> Result<Vec<TransactionSummary>, QueryError> {
    let params = json!([address, { "limit": SIGNATURE_LIMIT }]);

    let result = rpc.call("getSignaturesForAddress", params).await?;
    if result.is_null() {
        return Ok(Vec::new());
    }

    let entries: Vec<SignatureEntry> = serde_json::from_value(result)?;

    // Window also holds if the node ignores the limit param
    Ok(entries
        .into_iter()
        .take(SIGNATURE_LIMIT)
        .map(|entry| TransactionSummary {
            signature: entry.signature,
            timestamp: entry.block_time,
            succeeded: entry.err.is_none(),
        })
        .collect())
}
