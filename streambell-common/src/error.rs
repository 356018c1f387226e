// ================================================================
// File: streambell-common/src/error.rs
// ================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed required settings. Fatal: raised only during
    /// startup, before the polling loop begins.
    #[error("Config error: {0}")]
    Config(String),

    /// A single channel entry or platform token that could not be parsed.
    /// Recovered per entry; never aborts a batch parse.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Platform error: {0}")]
    Platform(String),

    /// A notifier send that failed. Recovered per destination.
    #[error("Notify error: {0}")]
    Notify(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Timeout error: {0}")]
    Timeout(#[from] tokio::time::error::Elapsed),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Parse(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Parse(s.to_string())
    }
}
