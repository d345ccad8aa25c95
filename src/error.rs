//! Error types for the query layer.

use thiserror::Error;

/// Failure modes of a wallet query.
///
/// All variants propagate unchanged to the caller; nothing is retried or
/// recovered inside the query layer.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The node returned a JSON-RPC error envelope. Carries the remote
    /// message verbatim.
    #[error("{0}")]
    Rpc(String),

    /// Network failure, or a response body that is not valid JSON.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response decoded as JSON but did not match the expected shape
    /// for the method.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(#[from] serde_json::Error),

    /// The supplied wallet address was empty after trimming. Rejected
    /// before any network call.
    #[error("wallet address is empty")]
    EmptyAddress,
}
