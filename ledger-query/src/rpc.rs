//! JSON-RPC remote port for a ledger node

use crate::{
    config::Config,
    metrics::{RPC_REQUESTS_TOTAL, RPC_REQUEST_DURATION},
    remote::{RemoteError, RemoteQueryPort, RemoteResult},
    types::*,
    Error, Result,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct LedgerClosedResult {
    ledger_index: u32,
}

#[derive(Debug, Deserialize)]
struct AccountInfoResult {
    account_data: AccountInfo,
}

/// Remote port talking JSON-RPC over HTTP
#[derive(Debug, Clone)]
pub struct JsonRpcClient {
    url: String,
    client: Client,
}

impl JsonRpcClient {
    /// Create new client
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            url: config.rpc_url.clone(),
            client,
        })
    }

    /// Endpoint this client talks to
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> RemoteResult<T> {
        let start = std::time::Instant::now();
        let result = self.send(method, params).await;

        RPC_REQUEST_DURATION
            .with_label_values(&[method])
            .observe(start.elapsed().as_secs_f64());
        let status = if result.is_ok() { "success" } else { "failure" };
        RPC_REQUESTS_TOTAL.with_label_values(&[method, status]).inc();

        result
    }

    async fn send<T: DeserializeOwned>(&self, method: &str, params: Value) -> RemoteResult<T> {
        debug!("JSON-RPC {} -> {}", method, self.url);

        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "method": method, "params": [params] }))
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("JSON-RPC {} returned HTTP {}", method, status);
            return Err(RemoteError::Transport(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| RemoteError::Malformed(format!("Invalid JSON-RPC response: {}", e)))?;

        let result = body
            .get("result")
            .ok_or_else(|| RemoteError::Malformed("Response has no result".to_string()))?;

        if result.get("status").and_then(Value::as_str) == Some("error") {
            let error = result
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknownError")
                .to_string();
            let error_message = result
                .get("error_message")
                .and_then(Value::as_str)
                .map(str::to_string);
            warn!("JSON-RPC {} failed: {}", method, error);
            return Err(RemoteError::Rpc {
                error,
                error_message,
            });
        }

        T::deserialize(result)
            .map_err(|e| RemoteError::Malformed(format!("Unexpected {} result: {}", method, e)))
    }
}

#[async_trait]
impl RemoteQueryPort for JsonRpcClient {
    async fn request_account_lines(
        &self,
        request: &AccountLinesRequest,
    ) -> RemoteResult<AccountLinesPage> {
        let mut params = json!({
            "account": request.account,
            "ledger_index": request.ledger_version,
            "limit": request.limit,
        });
        if let Some(marker) = &request.marker {
            params["marker"] = marker.0.clone();
        }
        if let Some(peer) = &request.peer {
            params["peer"] = Value::String(peer.clone());
        }
        self.call("account_lines", params).await
    }

    async fn get_ledger_sequence(&self) -> RemoteResult<LedgerVersion> {
        let result: LedgerClosedResult = self.call("ledger_closed", json!({})).await?;
        Ok(LedgerVersion(result.ledger_index))
    }

    async fn request_account_info(
        &self,
        account: &str,
        ledger_version: LedgerVersion,
    ) -> RemoteResult<AccountInfo> {
        let result: AccountInfoResult = self
            .call(
                "account_info",
                json!({
                    "account": account,
                    "ledger_index": ledger_version,
                    "strict": true,
                }),
            )
            .await?;
        Ok(result.account_data)
    }

    fn name(&self) -> &str {
        "json-rpc"
    }
}
