//! Network module
//!
//! JSON-RPC 2.0 client for the Solana node API.

pub mod rpc_client;

pub use rpc_client::{RpcCall, RpcClient};

#[cfg(test)]
pub use rpc_client::MockRpcCall;
