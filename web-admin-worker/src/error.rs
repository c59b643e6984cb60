//! Error types for the web admin worker
//!
//! Uses thiserror for ergonomic error definitions.
//! Every variant maps to an HTTP status and a client-safe message;
//! upstream detail stays in the server log.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, ProxyError>;

/// Proxy and dashboard errors
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Client sent a request we refuse to forward
    #[error("{0}")]
    BadRequest(String),

    /// Transport-level failure (connection refused, DNS, timeout)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Upstream answered with a non-2xx status
    #[error("Upstream returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dashboard fragment failed to render
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Worker runtime errors
    #[error("Worker error: {0}")]
    Worker(String),
}

impl ProxyError {
    /// HTTP status the client receives for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ProxyError::BadRequest(_) => 400,
            _ => 500,
        }
    }

    /// Text that may cross the trust boundary.
    ///
    /// Client input errors carry their own message; anything else is replaced
    /// by the route's fixed `fallback`.
    pub fn client_message(&self, fallback: &str) -> String {
        match self {
            ProxyError::BadRequest(msg) => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<worker::Error> for ProxyError {
    fn from(err: worker::Error) -> Self {
        ProxyError::Worker(err.to_string())
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::Http(err.to_string())
    }
}

impl From<ProxyError> for worker::Error {
    fn from(err: ProxyError) -> Self {
        worker::Error::RustError(err.to_string())
    }
}
