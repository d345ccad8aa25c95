//! Token holdings query
//!
//! Enumerates jsonParsed token accounts owned by an address under the SPL
//! token program and keeps only positions with a positive balance.

use serde::Deserialize;
use serde_json::json;

use crate::error::QueryError;
use crate::network::RpcCall;
use crate::utils::types::TokenHolding;

/// SPL token program scoping the account lookup
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// `getTokenAccountsByOwner` response payload
#[derive(Debug, Deserialize)]
struct TokenAccountList {
    #[serde(default)]
    value: Vec<TokenAccountEntry>,
}

#[derive(Debug, Deserialize)]
struct TokenAccountEntry {
    account: TokenAccount,
}

#[derive(Debug, Deserialize)]
struct TokenAccount {
    data: TokenAccountData,
}

#[derive(Debug, Deserialize)]
struct TokenAccountData {
    parsed: ParsedTokenData,
}

#[derive(Debug, Deserialize)]
struct ParsedTokenData {
    info: TokenAccountInfo,
}

#[derive(Debug, Deserialize)]
struct TokenAccountInfo {
    mint: String,
    #[serde(rename = "tokenAmount")]
    token_amount: TokenAmount,
}

#[derive(Debug, Deserialize)]
struct TokenAmount {
    // jsonParsed reports null here for some accounts; treated as zero
    #[serde(rename = "uiAmount")]
    ui_amount: Option<f64>,
}

/// Fetch the fungible-token holdings of `address`, preserving the node's
/// account order. An absent account list yields an empty result.
pub(crate) async fn fetch(
    rpc: &dyn RpcCall,
    address: &str,
) -> Result<Vec<TokenHolding>, QueryError> {
    let params = json!([
        address,
        { "programId": TOKEN_PROGRAM_ID },
        { "encoding": "jsonParsed" },
    ]);

    let result = rpc.call("getTokenAccountsByOwner", params).await?;
    if result.is_null() {
        return Ok(Vec::new());
    }

    let accounts: TokenAccountList = serde_json::from_value(result)?;

    Ok(accounts
        .value
        .into_iter()
        .map(|entry| {
            let info = entry.account.data.parsed.info;
            TokenHolding {
                mint: info.mint,
                amount: info.token_amount.ui_amount.unwrap_or(0.0),
            }
        })
        .filter(|holding| holding.amount > 0.0)
        .collect())
}
