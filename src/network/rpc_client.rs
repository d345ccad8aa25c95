//! Solana JSON-RPC Client
//!
//! Sends raw JSON-RPC 2.0 requests over HTTPS POST to a single endpoint
//! and returns the parsed `result` payload. Exactly one request per
//! invocation: no retry, no failover, no batching.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::RpcConfig;
use crate::error::QueryError;

/// Low-level call seam used by the wallet queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RpcCall: Send + Sync {
    /// Invoke `method` with an ordered `params` array and return the
    /// response's `result` field.
    async fn call(&self, method: &str, params: Value) -> Result<Value, QueryError>;
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    pub code: Option<i64>,
    pub message: String,
}

/// JSON-RPC 2.0 response envelope
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    pub result: Option<Value>,
    pub error: Option<RpcErrorObject>,
}

impl RpcResponse {
    /// A non-null `error` field fails the call with the remote message
    /// verbatim; otherwise the `result` payload is handed to the consumer.
    fn into_result(self) -> Result<Value, QueryError> {
        if let Some(error) = self.error {
            return Err(QueryError::Rpc(error.message));
        }
        Ok(self.result.unwrap_or(Value::Null))
    }
}

/// HTTP JSON-RPC client bound to one endpoint.
pub struct RpcClient {
    endpoint: String,
    http: reqwest::Client,
}

impl RpcClient {
    pub fn new(config: &RpcConfig) -> Result<Self, QueryError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            endpoint: config.url.clone(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RpcCall for RpcClient {
    async fn call(&self, method: &str, params: Value) -> Result<Value, QueryError> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let start = Instant::now();

        let response: RpcResponse = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        debug!(
            method,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "rpc call completed"
        );

        response.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn client_creation_with_defaults() {
        let config = RpcConfig::default();
        let client = RpcClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "https://api.mainnet-beta.solana.com");
    }

    #[test]
    fn error_envelope_surfaces_remote_message_verbatim() {
        let envelope: RpcResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32602, "message": "Invalid param: WrongSize" }
        }))
        .unwrap();

        match envelope.into_result() {
            Err(QueryError::Rpc(message)) => assert_eq!(message, "Invalid param: WrongSize"),
            other => panic!("expected rpc error, got {:?}", other),
        }
    }

    #[test]
    fn result_payload_passes_through() {
        let envelope: RpcResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "context": { "slot": 100 }, "value": 42 }
        }))
        .unwrap();

        let result = envelope.into_result().unwrap();
        assert_eq!(result["value"], 42);
    }

    #[test]
    fn null_error_field_is_not_a_failure() {
        let envelope: RpcResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": 7,
            "error": null
        }))
        .unwrap();

        assert_eq!(envelope.into_result().unwrap(), json!(7));
    }
}
