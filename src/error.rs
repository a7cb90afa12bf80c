//! Error types for Atyt.

use thiserror::Error;

/// Library-level error type for Atyt operations.
#[derive(Error, Debug)]
pub enum AtytError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Session store error: {0}")]
    SessionStore(String),

    #[error("No active session. Process a video first with 'atyt process <URL>'.")]
    NoSession,

    #[error("Backend error ({status}): {detail}")]
    Backend { status: u16, detail: String },

    #[error("Malformed backend response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Atyt operations.
pub type Result<T> = std::result::Result<T, AtytError>;
