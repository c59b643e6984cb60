//! Proxy routes
//!
//! Each client-facing route forwards to exactly one upstream call:
//!
//! | Route              | Upstream                          | Defaults   |
//! |--------------------|-----------------------------------|------------|
//! | `/api/latest`      | collector `/api/summary/latest`   | –          |
//! | `/api/summaries`   | collector `/api/summary/list`     | `limit=10` |
//! | `/api/stocks`      | collector `/api/stocks`           | `limit=20` |
//! | `/api/news`        | collector `/api/news`             | `limit=20` |
//! | `/api/analyze`     | analyzer `POST /analyze/daily`    | –          |
//!
//! Bodies pass through as `serde_json::Value`; failures collapse into a fixed
//! `{error}` envelope per route.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::client::Upstream;
use crate::config::Config;
use crate::error::{ProxyError, Result};

pub const ANALYZE_FAILURE: &str = "Failed to analyze data";
pub const NO_DATA_PROVIDED: &str = "No data provided";

/// Analyzer endpoint, relative to `AI_ANALYZER_URL`
pub const ANALYZE_PATH: &str = "/analyze/daily";

/// Config is loaded on the first request; `None` means loading failed
pub fn resolve_config(config: Option<&Config>) -> Result<&Config> {
    config.ok_or_else(|| ProxyError::Config("configuration unavailable".into()))
}

/// `POST /api/analyze` end to end.
///
/// The body is validated before the config is consulted, so a request with
/// no data is a 400 even when the config failed to load.
pub async fn analyze_request<U: Upstream>(
    config: Option<&Config>,
    upstream: U,
    request: AnalyzeRequest,
) -> Result<Value> {
    let payload = request.into_payload()?;
    Proxy::new(resolve_config(config)?, upstream)
        .submit(&payload)
        .await
}

/// Query string of an inbound request. First occurrence of a key wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = HashMap::new();
        for (key, value) in pairs {
            params.entry(key.into()).or_insert_with(|| value.into());
        }
        Self(params)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Set `key` only when the client did not send it
    #[must_use]
    pub fn with_default(mut self, key: &str, value: &str) -> Self {
        self.0
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
        self
    }
}

/// Read-only routes backed by the data collector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyRoute {
    Latest,
    Summaries,
    Stocks,
    News,
}

impl ProxyRoute {
    /// Path on the data collector
    pub fn upstream_path(self) -> &'static str {
        match self {
            ProxyRoute::Latest => "/api/summary/latest",
            ProxyRoute::Summaries => "/api/summary/list",
            ProxyRoute::Stocks => "/api/stocks",
            ProxyRoute::News => "/api/news",
        }
    }

    /// Fixed message returned to the client when the upstream call fails
    pub fn failure_message(self) -> &'static str {
        match self {
            ProxyRoute::Latest => "Failed to fetch latest summary",
            ProxyRoute::Summaries => "Failed to fetch summaries",
            ProxyRoute::Stocks => "Failed to fetch stocks",
            ProxyRoute::News => "Failed to fetch news",
        }
    }

    /// Query pairs forwarded upstream, in upstream order.
    ///
    /// Optional filters are omitted when absent; `limit` always goes out.
    pub fn upstream_query(self, params: &QueryParams) -> Vec<(&'static str, String)> {
        let (optional, default_limit): (&[&'static str], Option<&str>) = match self {
            ProxyRoute::Latest => (&[], None),
            ProxyRoute::Summaries => (&[], Some("10")),
            ProxyRoute::Stocks => (&["symbol", "market"], Some("20")),
            ProxyRoute::News => (&["source"], Some("20")),
        };

        let mut query: Vec<(&'static str, String)> = optional
            .iter()
            .filter_map(|&key| params.get(key).map(|v| (key, v.to_string())))
            .collect();

        if let Some(default_limit) = default_limit {
            let limit = params.get("limit").unwrap_or(default_limit);
            query.push(("limit", limit.to_string()));
        }

        query
    }
}

/// Body accepted by `POST /api/analyze`
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "stockData", default)]
    pub stock_data: Option<Value>,
    #[serde(rename = "newsData", default)]
    pub news_data: Option<Value>,
}

/// Body sent to the analyzer's `/analyze/daily`
#[derive(Debug, Serialize)]
pub struct AnalyzePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub news_data: Option<Value>,
}

impl AnalyzeRequest {
    /// Parse a raw request body; anything unparseable counts as `{}`
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Reject requests that carry neither field, then rename for the analyzer
    pub fn into_payload(self) -> Result<AnalyzePayload> {
        let has_stock = self.stock_data.as_ref().is_some_and(is_truthy);
        let has_news = self.news_data.as_ref().is_some_and(is_truthy);
        if !has_stock && !has_news {
            return Err(ProxyError::BadRequest(NO_DATA_PROVIDED.to_string()));
        }
        Ok(AnalyzePayload {
            stock_data: self.stock_data,
            news_data: self.news_data,
        })
    }
}

/// JSON truthiness: null, false, 0 and "" are falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Status and JSON body handed back to the client
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyReply {
    pub status: u16,
    pub body: Value,
}

impl ProxyReply {
    pub fn success(body: Value) -> Self {
        Self { status: 200, body }
    }

    /// Error envelope; upstream detail never reaches the body
    pub fn failure(error: &ProxyError, fallback: &str) -> Self {
        Self {
            status: error.status_code(),
            body: json!({ "error": error.client_message(fallback) }),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self {
            status: 404,
            body: json!({ "error": message }),
        }
    }

    pub fn from_result(result: &Result<Value>, fallback: &str) -> Self {
        match result {
            Ok(body) => Self::success(body.clone()),
            Err(e) => Self::failure(e, fallback),
        }
    }
}

/// Forwards client requests to the configured upstreams
pub struct Proxy<'a, U: Upstream> {
    config: &'a Config,
    upstream: U,
}

impl<'a, U: Upstream> Proxy<'a, U> {
    pub fn new(config: &'a Config, upstream: U) -> Self {
        Self { config, upstream }
    }

    /// Full upstream URL for a collector route
    pub fn collector_url(&self, route: ProxyRoute) -> String {
        format!("{}{}", self.config.data_collector_url, route.upstream_path())
    }

    pub fn analyzer_url(&self) -> String {
        format!("{}{ANALYZE_PATH}", self.config.ai_analyzer_url)
    }

    /// Forward a read-only route; exactly one upstream call
    pub async fn forward(&self, route: ProxyRoute, params: &QueryParams) -> Result<Value> {
        let url = self.collector_url(route);
        let query = route.upstream_query(params);
        self.upstream.get_json(&url, &query).await
    }

    /// Validate and forward an analysis request; no upstream call on bad input
    pub async fn analyze(&self, request: AnalyzeRequest) -> Result<Value> {
        let payload = request.into_payload()?;
        self.submit(&payload).await
    }

    /// Send an already validated payload to the analyzer
    pub async fn submit(&self, payload: &AnalyzePayload) -> Result<Value> {
        let body = serde_json::to_value(payload)?;
        self.upstream.post_json(&self.analyzer_url(), &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Get {
            url: String,
            query: Vec<(&'static str, String)>,
        },
        Post {
            url: String,
            body: Value,
        },
    }

    /// Records calls and answers with a canned result
    struct FakeUpstream {
        calls: RefCell<Vec<Call>>,
        reply: fn() -> Result<Value>,
    }

    impl FakeUpstream {
        fn answering(reply: fn() -> Result<Value>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                reply,
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl Upstream for &FakeUpstream {
        async fn get_json(&self, url: &str, query: &[(&'static str, String)]) -> Result<Value> {
            self.calls.borrow_mut().push(Call::Get {
                url: url.to_string(),
                query: query.to_vec(),
            });
            (self.reply)()
        }

        async fn post_json(&self, url: &str, body: &Value) -> Result<Value> {
            self.calls.borrow_mut().push(Call::Post {
                url: url.to_string(),
                body: body.clone(),
            });
            (self.reply)()
        }
    }

    fn test_config() -> Config {
        Config {
            environment: "test".to_string(),
            log_level: "debug".to_string(),
            data_collector_url: "http://collector:8080".to_string(),
            ai_analyzer_url: "http://analyzer:8000".to_string(),
        }
    }

    fn connection_refused() -> Result<Value> {
        Err(ProxyError::Http(
            "error sending request: Connection refused (os error 111)".into(),
        ))
    }

    fn empty_list() -> Result<Value> {
        Ok(json!([]))
    }

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        QueryParams::from_pairs(pairs.iter().copied())
    }

    #[tokio::test]
    async fn test_stocks_defaults_limit_without_filters() {
        let config = test_config();
        let upstream = FakeUpstream::answering(empty_list);
        let proxy = Proxy::new(&config, &upstream);

        let body = proxy
            .forward(ProxyRoute::Stocks, &QueryParams::default())
            .await
            .expect("fake upstream succeeds");

        assert_eq!(body, json!([]));
        assert_eq!(
            upstream.calls(),
            vec![Call::Get {
                url: "http://collector:8080/api/stocks".to_string(),
                query: vec![("limit", "20".to_string())],
            }]
        );
    }

    #[tokio::test]
    async fn test_query_passthrough_and_defaults() {
        let config = test_config();
        let upstream = FakeUpstream::answering(empty_list);
        let proxy = Proxy::new(&config, &upstream);

        proxy
            .forward(
                ProxyRoute::Stocks,
                &params(&[("market", "HK"), ("symbol", "0700.HK"), ("limit", "5"), ("page", "2")]),
            )
            .await
            .expect("fake upstream succeeds");
        proxy
            .forward(ProxyRoute::News, &params(&[("source", "reuters")]))
            .await
            .expect("fake upstream succeeds");
        proxy
            .forward(ProxyRoute::Summaries, &QueryParams::default())
            .await
            .expect("fake upstream succeeds");
        proxy
            .forward(ProxyRoute::Latest, &params(&[("limit", "3")]))
            .await
            .expect("fake upstream succeeds");

        let queries: Vec<_> = upstream
            .calls()
            .into_iter()
            .map(|call| match call {
                Call::Get { url, query } => (url, query),
                Call::Post { .. } => panic!("unexpected POST"),
            })
            .collect();

        assert_eq!(
            queries[0].1,
            vec![
                ("symbol", "0700.HK".to_string()),
                ("market", "HK".to_string()),
                ("limit", "5".to_string()),
            ]
        );
        assert_eq!(
            queries[1].1,
            vec![("source", "reuters".to_string()), ("limit", "20".to_string())]
        );
        assert_eq!(queries[2].0, "http://collector:8080/api/summary/list");
        assert_eq!(queries[2].1, vec![("limit", "10".to_string())]);
        assert_eq!(queries[3].0, "http://collector:8080/api/summary/latest");
        assert!(queries[3].1.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_yields_fixed_envelope_once() {
        let config = test_config();

        for route in [
            ProxyRoute::Latest,
            ProxyRoute::Summaries,
            ProxyRoute::Stocks,
            ProxyRoute::News,
        ] {
            let upstream = FakeUpstream::answering(connection_refused);
            let proxy = Proxy::new(&config, &upstream);

            let result = proxy.forward(route, &QueryParams::default()).await;
            let reply = ProxyReply::from_result(&result, route.failure_message());

            assert_eq!(reply.status, 500);
            assert_eq!(reply.body, json!({ "error": route.failure_message() }));
            assert_eq!(upstream.calls().len(), 1, "{route:?} must call upstream once");
        }
    }

    #[tokio::test]
    async fn test_upstream_non_2xx_body_not_forwarded() {
        fn upstream_503() -> Result<Value> {
            Err(ProxyError::Upstream {
                status: 503,
                body: "{\"error\":\"Database not available\"}".into(),
            })
        }

        let config = test_config();
        let upstream = FakeUpstream::answering(upstream_503);
        let proxy = Proxy::new(&config, &upstream);

        let result = proxy.forward(ProxyRoute::News, &QueryParams::default()).await;
        let reply = ProxyReply::from_result(&result, ProxyRoute::News.failure_message());

        assert_eq!(reply.status, 500);
        assert_eq!(reply.body, json!({ "error": "Failed to fetch news" }));
    }

    #[tokio::test]
    async fn test_upstream_body_returned_verbatim() {
        fn summary() -> Result<Value> {
            Ok(json!({
                "summary_date": "2024-03-01T08:00:00Z",
                "risk_level": "中等",
                "extra": { "nested": [1, 2, 3] },
            }))
        }

        let config = test_config();
        let upstream = FakeUpstream::answering(summary);
        let proxy = Proxy::new(&config, &upstream);

        let result = proxy.forward(ProxyRoute::Latest, &QueryParams::default()).await;
        let reply = ProxyReply::from_result(&result, ProxyRoute::Latest.failure_message());

        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, summary().expect("canned"));
    }

    #[tokio::test]
    async fn test_analyze_without_data_is_rejected_before_upstream() {
        let config = test_config();
        let upstream = FakeUpstream::answering(empty_list);
        let proxy = Proxy::new(&config, &upstream);

        for body in ["{}", "", "not json", r#"{"stockData": null, "newsData": ""}"#] {
            let result = proxy.analyze(AnalyzeRequest::from_body(body)).await;
            let reply = ProxyReply::from_result(&result, ANALYZE_FAILURE);

            assert_eq!(reply.status, 400, "body {body:?}");
            assert_eq!(reply.body, json!({ "error": "No data provided" }));
        }
        assert!(upstream.calls().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_forwards_renamed_fields() {
        fn analysis() -> Result<Value> {
            Ok(json!({ "advice": "hold", "confidence": 0.8 }))
        }

        let config = test_config();
        let upstream = FakeUpstream::answering(analysis);
        let proxy = Proxy::new(&config, &upstream);

        let request = AnalyzeRequest::from_body(r#"{"stockData": {"AAPL": 189.5}}"#);
        let result = proxy.analyze(request).await;
        let reply = ProxyReply::from_result(&result, ANALYZE_FAILURE);

        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, json!({ "advice": "hold", "confidence": 0.8 }));
        assert_eq!(
            upstream.calls(),
            vec![Call::Post {
                url: "http://analyzer:8000/analyze/daily".to_string(),
                body: json!({ "stock_data": { "AAPL": 189.5 } }),
            }]
        );
    }

    #[tokio::test]
    async fn test_analyze_upstream_failure() {
        let config = test_config();
        let upstream = FakeUpstream::answering(connection_refused);
        let proxy = Proxy::new(&config, &upstream);

        let request = AnalyzeRequest::from_body(r#"{"newsData": [{"title": "x"}]}"#);
        let result = proxy.analyze(request).await;
        let reply = ProxyReply::from_result(&result, ANALYZE_FAILURE);

        assert_eq!(reply.status, 500);
        assert_eq!(reply.body, json!({ "error": "Failed to analyze data" }));
        assert_eq!(upstream.calls().len(), 1);
    }

    #[test]
    fn test_missing_config_keeps_route_envelopes() {
        for route in [
            ProxyRoute::Latest,
            ProxyRoute::Summaries,
            ProxyRoute::Stocks,
            ProxyRoute::News,
        ] {
            let result = resolve_config(None).map(|_| Value::Null);
            let reply = ProxyReply::from_result(&result, route.failure_message());

            assert_eq!(reply.status, 500);
            assert_eq!(reply.body, json!({ "error": route.failure_message() }));
        }

        let config = test_config();
        assert!(resolve_config(Some(&config)).is_ok());
    }

    #[tokio::test]
    async fn test_analyze_validates_before_config() {
        let upstream = FakeUpstream::answering(empty_list);

        let result = analyze_request(None, &upstream, AnalyzeRequest::from_body("{}")).await;
        let reply = ProxyReply::from_result(&result, ANALYZE_FAILURE);
        assert_eq!(reply.status, 400);
        assert_eq!(reply.body, json!({ "error": "No data provided" }));

        let request = AnalyzeRequest::from_body(r#"{"stockData": {"AAPL": 1}}"#);
        let result = analyze_request(None, &upstream, request).await;
        let reply = ProxyReply::from_result(&result, ANALYZE_FAILURE);
        assert_eq!(reply.status, 500);
        assert_eq!(reply.body, json!({ "error": "Failed to analyze data" }));

        assert!(upstream.calls().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_request_with_config_posts_once() {
        let config = test_config();
        let upstream = FakeUpstream::answering(empty_list);

        let request = AnalyzeRequest::from_body(r#"{"newsData": [{"title": "x"}]}"#);
        let result = analyze_request(Some(&config), &upstream, request).await;

        assert_eq!(result.expect("fake upstream succeeds"), json!([]));
        assert_eq!(
            upstream.calls(),
            vec![Call::Post {
                url: "http://analyzer:8000/analyze/daily".to_string(),
                body: json!({ "news_data": [{ "title": "x" }] }),
            }]
        );
    }

    #[test]
    fn test_not_found_reply() {
        let reply = ProxyReply::not_found("Unknown view");
        assert_eq!(reply.status, 404);
        assert_eq!(reply.body, json!({ "error": "Unknown view" }));
    }

    #[test]
    fn test_query_params_first_wins_and_defaults() {
        let params = params(&[("limit", "5"), ("limit", "50"), ("symbol", "")]);
        assert_eq!(params.get("limit"), Some("5"));
        assert_eq!(params.get("symbol"), Some(""));

        let params = params.with_default("limit", "15").with_default("source", "sina");
        assert_eq!(params.get("limit"), Some("5"));
        assert_eq!(params.get("source"), Some("sina"));
    }
}
