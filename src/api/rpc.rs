use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use crate::api::http;
use crate::utils::terminal;

/// Balance lookup against the chain RPC node.
///
/// `None` means the query itself failed; `Some(0)` is a genuine empty balance.
#[async_trait]
pub trait BalanceQuery {
    async fn wei_balance(&self, address: &str) -> Option<u128>;
}

pub struct RpcClient {
    client: Client,
    url: String,
}

impl RpcClient {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl BalanceQuery for RpcClient {
    async fn wei_balance(&self, address: &str) -> Option<u128> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 0,
            "method": "eth_getBalance",
            "params": [address, "latest"],
        });

        match http::post_json(&self.client, &self.url, &body).await {
            Ok(response) => wei_from_response(&response),
            Err(failure) => {
                terminal::error(&format!("{} in get_balance", failure));
                None
            }
        }
    }
}

/// Extracts the hex `result` field from an `eth_getBalance` response. The node
/// omits the field for unknown accounts, which counts as a zero balance.
fn wei_from_response(response: &Value) -> Option<u128> {
    let hex = response
        .get("result")
        .and_then(Value::as_str)
        .unwrap_or("0x0");
    parse_hex_wei(hex)
}

fn parse_hex_wei(hex: &str) -> Option<u128> {
    u128::from_str_radix(hex.trim_start_matches("0x"), 16).ok()
}
