//! Configuration management
//!
//! All settings are read from the environment with sane defaults. Absence of
//! an API key is not an error: the ZeroEntropy client degrades to demo mode
//! and the Claude path reports a configuration error at call time.

use serde::{Deserialize, Serialize};

/// ZeroEntropy service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZeroEntropyConfig {
    /// Base URL of the ZeroEntropy API
    #[serde(default = "default_zeroentropy_url")]
    pub base_url: String,

    /// Collection used for the demo document set
    #[serde(default = "default_collection_name")]
    pub collection_name: String,

    /// API key (optional; missing key switches the client into demo mode)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ZeroEntropyConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("EXECBRIEF_ZEROENTROPY_URL")
                .unwrap_or_else(|_| default_zeroentropy_url()),
            collection_name: default_collection_name(),
            api_key: std::env::var("ZEROENTROPY_API_KEY").ok(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Claude (Anthropic messages API) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeConfig {
    /// Base URL of the Anthropic API
    #[serde(default = "default_claude_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_claude_model")]
    pub model: String,

    /// Token budget for a single answer
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// API key (optional; missing key yields a configuration error at call
    /// time, never at construction)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ClaudeConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("EXECBRIEF_CLAUDE_URL")
                .unwrap_or_else(|_| default_claude_url()),
            model: std::env::var("EXECBRIEF_CLAUDE_MODEL")
                .unwrap_or_else(|_| default_claude_model()),
            max_tokens: default_max_tokens(),
            api_key: std::env::var("CLAUDE_API_KEY").ok(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_zeroentropy_url() -> String {
    "https://api.zeroentropy.dev/v1".to_string()
}

fn default_collection_name() -> String {
    "synthesis_comparison_demo".to_string()
}

fn default_claude_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_claude_model() -> String {
    "claude-3-opus-20240229".to_string()
}

fn default_max_tokens() -> u32 {
    512
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_hosted_services() {
        let ze = ZeroEntropyConfig {
            base_url: default_zeroentropy_url(),
            collection_name: default_collection_name(),
            api_key: None,
            timeout_secs: default_timeout(),
        };
        assert_eq!(ze.collection_name, "synthesis_comparison_demo");
        assert!(ze.base_url.starts_with("https://api.zeroentropy.dev"));

        let claude = ClaudeConfig {
            base_url: default_claude_url(),
            model: default_claude_model(),
            max_tokens: default_max_tokens(),
            api_key: None,
            timeout_secs: default_timeout(),
        };
        assert_eq!(claude.model, "claude-3-opus-20240229");
        assert_eq!(claude.max_tokens, 512);
    }
}
