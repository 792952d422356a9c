//! Error types for execbrief

use thiserror::Error;

/// Result type alias using ExecBriefError
pub type Result<T> = std::result::Result<T, ExecBriefError>;

/// Error type alias for convenience
pub type Error = ExecBriefError;

/// Main error type for execbrief
#[derive(Debug, Error)]
pub enum ExecBriefError {
    /// Missing or invalid configuration (e.g. no API key where one is
    /// required). Never fatal at startup: networked paths degrade to demo
    /// mode instead.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-success HTTP status from an upstream service. The body text is
    /// preserved verbatim for display.
    #[error("Upstream error (HTTP {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl ExecBriefError {
    /// True when the error represents a missing credential or similar
    /// configuration problem rather than an upstream failure.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// The upstream HTTP status, when one applies.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
