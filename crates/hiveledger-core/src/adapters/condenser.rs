use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::filter::FilterMask;
use crate::source::{HistorySource, RawRecord, SourceError, SourceFuture};

const ACCOUNT_HISTORY_METHOD: &str = "condenser_api.get_account_history";

/// JSON-RPC history source backed by a condenser API node.
#[derive(Debug, Clone)]
pub struct CondenserClient {
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

impl CondenserClient {
    pub const DEFAULT_ENDPOINT: &'static str = "https://api.hive.blog";
    pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;

    pub fn new(endpoint: impl Into<String>) -> Result<Self, SourceError> {
        Self::with_timeout(endpoint, Duration::from_millis(Self::DEFAULT_TIMEOUT_MS))
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| SourceError::internal(format!("http client setup: {error}")))?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value, SourceError> {
        let body = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1,
        });

        let response = self
            .client
            .post(self.endpoint.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|error| SourceError::unavailable(format!("{method}: {error}")))?;

        let rpc = response
            .json::<RpcResponse>()
            .await
            .map_err(|error| SourceError::malformed_page(format!("{method}: {error}")))?;

        match (rpc.result, rpc.error) {
            (Some(result), _) => Ok(result),
            (None, Some(error)) => Err(SourceError::unavailable(format!(
                "error while retrieving data from {method}: {error}"
            ))),
            (None, None) => Err(SourceError::malformed_page(format!(
                "{method}: response carried neither result nor error"
            ))),
        }
    }
}

impl HistorySource for CondenserClient {
    fn fetch_page<'a>(
        &'a self,
        account: &'a str,
        cursor: i64,
        limit: u32,
        mask: &'a FilterMask,
    ) -> SourceFuture<'a, Vec<RawRecord>> {
        Box::pin(async move {
            // Absent mask words go over the wire as null, which the node
            // reads as "no restriction on that half".
            let params = json!([account, cursor, limit, mask.low, mask.high]);
            let result = self.call(ACCOUNT_HISTORY_METHOD, params).await?;
            serde_json::from_value(result).map_err(|error| {
                SourceError::malformed_page(format!("{ACCOUNT_HISTORY_METHOD}: {error}"))
            })
        })
    }
}
