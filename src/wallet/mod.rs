//! Wallet queries
//!
//! Three read-only lookups against the node API plus a combined snapshot:
//! native balance, token holdings, and recent transaction signatures.

pub mod balance;
pub mod history;
pub mod tokens;

pub use balance::LAMPORTS_PER_SOL;
pub use history::SIGNATURE_LIMIT;
pub use tokens::TOKEN_PROGRAM_ID;

use std::sync::Arc;
use tracing::debug;

use crate::error::QueryError;
use crate::network::RpcCall;
use crate::utils::types::{TokenHolding, TransactionSummary, WalletSnapshot};

/// Read-only query service for one wallet address at a time.
///
/// Stateless beyond the RPC handle: every lookup issues fresh reads and the
/// results carry no identity across calls.
pub struct WalletExplorer {
    rpc: Arc<dyn RpcCall>,
}

impl WalletExplorer {
    pub fn new(rpc: Arc<dyn RpcCall>) -> Self {
        Self { rpc }
    }

    /// Native balance in SOL.
    pub async fn balance(&self, address: &str) -> Result<f64, QueryError> {
        balance::fetch(self.rpc.as_ref(), checked(address)?).await
    }

    /// Fungible-token holdings with a positive amount, in node order.
    pub async fn token_holdings(&self, address: &str) -> Result<Vec<TokenHolding>, QueryError> {
        tokens::fetch(self.rpc.as_ref(), checked(address)?).await
    }

    /// The most recent transaction signatures, in node order.
    pub async fn recent_transactions(
        &self,
        address: &str,
    ) -> Result<Vec<TransactionSummary>, QueryError> {
        history::fetch(self.rpc.as_ref(), checked(address)?).await
    }

    /// Run all three queries concurrently and join them into a snapshot.
    ///
    /// Fails fast: the first error aborts the lookup and no partial result
    /// is surfaced.
    pub async fn lookup(&self, address: &str) -> Result<WalletSnapshot, QueryError> {
        let address = checked(address)?;
        debug!(address, "wallet lookup started");

        let (balance, tokens, transactions) = futures::try_join!(
            balance::fetch(self.rpc.as_ref(), address),
            tokens::fetch(self.rpc.as_ref(), address),
            history::fetch(self.rpc.as_ref(), address),
        )?;

        Ok(WalletSnapshot {
            balance,
            tokens,
            transactions,
        })
    }
}

/// Trim the address and reject empty input before any network call.
fn checked(address: &str) -> Result<&str, QueryError> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(QueryError::EmptyAddress);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::MockRpcCall;
    use crate::utils::types::{TokenHolding, TransactionSummary};
    use serde_json::json;

    fn explorer(rpc: MockRpcCall) -> WalletExplorer {
        WalletExplorer::new(Arc::new(rpc))
    }

    fn expect_method(rpc: &mut MockRpcCall, method: &'static str, result: serde_json::Value) {
        rpc.expect_call()
            .withf(move |m, _| m == method)
            .returning(move |_, _| Ok(result.clone()));
    }

    #[tokio::test]
    async fn lookup_assembles_all_three_results() {
        let mut rpc = MockRpcCall::new();
        expect_method(
            &mut rpc,
            "getBalance",
            json!({ "context": { "slot": 1 }, "value": 1_500_000_000u64 }),
        );
        expect_method(
            &mut rpc,
            "getTokenAccountsByOwner",
            json!({
                "context": { "slot": 1 },
                "value": [{
                    "pubkey": "acc1",
                    "account": { "data": { "parsed": { "info": {
                        "mint": "MintA",
                        "tokenAmount": { "uiAmount": 4.25 }
                    }}}}
                }]
            }),
        );
        expect_method(
            &mut rpc,
            "getSignaturesForAddress",
            json!([{ "signature": "sig1", "blockTime": 1_700_000_000, "err": null }]),
        );

        let snapshot = explorer(rpc).lookup("addr111").await.unwrap();
        assert_eq!(snapshot.balance, 1.5);
        assert_eq!(
            snapshot.tokens,
            vec![TokenHolding { mint: "MintA".to_string(), amount: 4.25 }]
        );
        assert_eq!(
            snapshot.transactions,
            vec![TransactionSummary {
                signature: "sig1".to_string(),
                timestamp: Some(1_700_000_000),
                succeeded: true,
            }]
        );
    }

    #[tokio::test]
    async fn lookup_trims_the_address_before_querying() {
        let mut rpc = MockRpcCall::new();
        rpc.expect_call()
            .withf(|_, params| params[0] == "addr111")
            .returning(|method, _| match method {
                "getBalance" => Ok(json!({ "context": { "slot": 1 }, "value": 0 })),
                "getTokenAccountsByOwner" => {
                    Ok(json!({ "context": { "slot": 1 }, "value": [] }))
                }
                _ => Ok(json!([])),
            });

        let snapshot = explorer(rpc).lookup("  addr111  ").await.unwrap();
        assert_eq!(snapshot.balance, 0.0);
    }

    #[tokio::test]
    async fn empty_address_is_rejected_without_any_call() {
        let mut rpc = MockRpcCall::new();
        rpc.expect_call().times(0);

        let explorer = explorer(rpc);
        assert!(matches!(
            explorer.lookup("").await,
            Err(QueryError::EmptyAddress)
        ));
        assert!(matches!(
            explorer.lookup("   \t ").await,
            Err(QueryError::EmptyAddress)
        ));
        assert!(matches!(
            explorer.balance(" ").await,
            Err(QueryError::EmptyAddress)
        ));
    }

    #[tokio::test]
    async fn one_failing_call_fails_the_whole_lookup() {
        let mut rpc = MockRpcCall::new();
        rpc.expect_call().returning(|method, _| match method {
            "getBalance" => Err(QueryError::Rpc("node is behind".to_string())),
            "getTokenAccountsByOwner" => Ok(json!({ "context": { "slot": 1 }, "value": [] })),
            _ => Ok(json!([])),
        });

        match explorer(rpc).lookup("addr111").await {
            Err(QueryError::Rpc(message)) => assert_eq!(message, "node is behind"),
            other => panic!("expected rpc error, got {:?}", other),
        }
    }
}
