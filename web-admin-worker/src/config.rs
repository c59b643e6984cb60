//! Configuration management for the web admin worker

use crate::error::{ProxyError, Result};
use worker::Env;

const DEFAULT_DATA_COLLECTOR_URL: &str = "http://collector:8080";
const DEFAULT_AI_ANALYZER_URL: &str = "http://analyzer:8000";

/// Web admin configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment (production, staging, development)
    pub environment: String,

    /// Log level; `debug` logs every upstream call
    pub log_level: String,

    /// Data collector base URL, without trailing slash
    pub data_collector_url: String,

    /// AI analyzer base URL, without trailing slash
    pub ai_analyzer_url: String,
}

impl Config {
    /// Load configuration from Cloudflare environment variables
    pub fn from_env(env: &Env) -> Result<Self> {
        let config = Self::from_vars(|key| env.var(key).ok().map(|v| v.to_string()));
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from any variable source, applying defaults
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "production".to_string()),

            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),

            data_collector_url: base_url(
                lookup("DATA_COLLECTOR_URL").as_deref(),
                DEFAULT_DATA_COLLECTOR_URL,
            ),

            ai_analyzer_url: base_url(lookup("AI_ANALYZER_URL").as_deref(), DEFAULT_AI_ANALYZER_URL),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("DATA_COLLECTOR_URL", &self.data_collector_url),
            ("AI_ANALYZER_URL", &self.ai_analyzer_url),
        ] {
            if url.is_empty() {
                return Err(ProxyError::Config(format!("{name} must not be empty")));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ProxyError::Config(format!(
                    "{name} must be an http(s) URL, got {url}"
                )));
            }
        }
        Ok(())
    }

    /// Whether per-request upstream logging is on
    pub fn is_debug(&self) -> bool {
        self.log_level.eq_ignore_ascii_case("debug")
    }
}

fn base_url(value: Option<&str>, default: &str) -> String {
    value
        .map(str::trim)
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_string()
}
