//! Common types for the web admin
//!
//! Transient DTOs read from upstream payloads. The proxy routes never decode
//! these; only the dashboard renderer does, leniently.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Daily market summary produced by the data collector
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Summary {
    #[serde(deserialize_with = "lenient_text")]
    pub summary_date: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub market_overview: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub key_news: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub investment_advice: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub risk_level: Option<String>,
    /// Object, or the same object JSON-encoded as a string
    pub sentiment_analysis: Option<Value>,
}

impl Summary {
    /// `sentiment_analysis.overall_sentiment`, when present and numeric
    pub fn overall_sentiment(&self) -> Option<f64> {
        let analysis = match self.sentiment_analysis.as_ref()? {
            Value::String(raw) => serde_json::from_str::<Value>(raw).ok()?,
            other => other.clone(),
        };
        analysis.get("overall_sentiment").and_then(number_of)
    }
}

/// Stock quote row
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Stock {
    #[serde(deserialize_with = "lenient_text")]
    pub symbol: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub market: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub change_percent: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub volume: Option<f64>,
}

/// News article with sentiment score
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub content: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub source: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub published_at: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub sentiment_score: Option<f64>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Root endpoint response
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

/// Public paths advertised by `GET /`
#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub latest: &'static str,
    pub summaries: &'static str,
    pub stocks: &'static str,
    pub news: &'static str,
    pub analyze: &'static str,
    pub dashboard: &'static str,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            message: "Financial Summary Web Admin",
            version: env!("CARGO_PKG_VERSION"),
            endpoints: Endpoints {
                health: "/health",
                latest: "/api/latest",
                summaries: "/api/summaries",
                stocks: "/api/stocks",
                news: "/api/news",
                analyze: "/api/analyze",
                dashboard: "/dashboard",
            },
        }
    }
}

/// Numbers or numeric strings; NaN, infinities and anything else count as missing
pub fn number_of(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Strings as-is, numbers and booleans stringified, anything else missing
pub fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_of(&value))
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_of(&value))
}
