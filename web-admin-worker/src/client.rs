//! HTTP client for the upstream services
//!
//! Talks to the data collector and the AI analyzer. One attempt per call,
//! no retries, no timeout beyond the client default.

use serde_json::Value;

use crate::error::{ProxyError, Result};

/// Something that can answer upstream JSON calls.
///
/// The proxy is generic over this so routes can be exercised without a network.
#[allow(async_fn_in_trait)] // Workers run single-threaded; no Send bound needed
pub trait Upstream {
    /// GET `url` with the given query pairs, decoding the JSON body
    async fn get_json(&self, url: &str, query: &[(&'static str, String)]) -> Result<Value>;

    /// POST a JSON body to `url`, decoding the JSON response
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value>;
}

/// reqwest-backed upstream client
#[derive(Debug, Clone, Default)]
pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Handle upstream response, checking for errors
    async fn handle_response(response: reqwest::Response) -> Result<Value> {
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(ProxyError::from)
    }
}

impl Upstream for HttpUpstream {
    async fn get_json(&self, url: &str, query: &[(&'static str, String)]) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .query(query)
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::handle_response(response).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value> {
        let response = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;

        Self::handle_response(response).await
    }
}
