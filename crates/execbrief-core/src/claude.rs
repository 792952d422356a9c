//! HTTP client for the Anthropic messages API
//!
//! Used by the comparison harness to answer a query from ZeroEntropy-provided
//! context. Cost accounting is a documented flat estimate, not usage-based
//! billing.

use crate::config::ClaudeConfig;
use crate::error::{ExecBriefError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Anthropic API version header value.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Flat token assumptions for the per-call cost estimate: ~$15/M input
/// tokens, ~$75/M output tokens, assuming 2K in / 500 out per short answer.
const ESTIMATED_INPUT_TOKENS: f64 = 2000.0;
const ESTIMATED_OUTPUT_TOKENS: f64 = 500.0;
const INPUT_TOKEN_PRICE: f64 = 0.000_015;
const OUTPUT_TOKEN_PRICE: f64 = 0.000_075;

/// A completed Claude answer with its estimated cost in dollars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeAnswer {
    pub synthesis: String,
    pub cost: f64,
}

/// Client for the Anthropic messages API.
pub struct ClaudeClient {
    http: reqwest::Client,
    config: ClaudeConfig,
}

impl ClaudeClient {
    pub fn new(config: ClaudeConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ExecBriefError::Http)?;
        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClaudeConfig::default())
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// The fixed executive-assistant prompt wrapping context and query.
    pub fn build_prompt(context: &str, query: &str) -> String {
        format!(
            "You are an executive assistant. Here is some company context:\n{}\n\n\
             Based on this, answer the following question as concisely as possible:\n\"{}\"",
            context, query
        )
    }

    /// Flat per-call cost estimate in dollars.
    pub fn estimated_cost() -> f64 {
        ESTIMATED_INPUT_TOKENS * INPUT_TOKEN_PRICE + ESTIMATED_OUTPUT_TOKENS * OUTPUT_TOKEN_PRICE
    }

    /// Answer `query` using `context`, returning the generated text and the
    /// flat cost estimate. Fails with a `Config` error when no key is set
    /// and an `Upstream` error mirroring any non-2xx response verbatim.
    pub async fn answer(&self, query: &str, context: &str) -> Result<ClaudeAnswer> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| ExecBriefError::Config("Claude API key not configured".to_string()))?;

        #[derive(Serialize)]
        struct Message<'a> {
            role: &'a str,
            content: &'a str,
        }

        #[derive(Serialize)]
        struct MessagesRequest<'a> {
            model: &'a str,
            max_tokens: u32,
            messages: Vec<Message<'a>>,
        }

        #[derive(Deserialize)]
        struct MessagesResponse {
            content: Vec<ContentBlock>,
        }

        #[derive(Deserialize)]
        struct ContentBlock {
            text: String,
        }

        let prompt = Self::build_prompt(context, query);
        let request = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            messages: vec![Message {
                role: "user",
                content: &prompt,
            }],
        };

        let url = format!("{}/v1/messages", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ExecBriefError::Upstream { status, body });
        }

        let parsed: MessagesResponse = response.json().await?;
        let synthesis = parsed
            .content
            .first()
            .map(|block| block.text.clone())
            .ok_or_else(|| ExecBriefError::Llm("No response from Claude".to_string()))?;

        Ok(ClaudeAnswer {
            synthesis,
            cost: Self::estimated_cost(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_context_and_query() {
        let prompt = ClaudeClient::build_prompt("ARR is $170M", "What is our ARR?");
        assert!(prompt.starts_with("You are an executive assistant."));
        assert!(prompt.contains("ARR is $170M"));
        assert!(prompt.ends_with("\"What is our ARR?\""));
    }

    #[test]
    fn cost_estimate_is_the_documented_flat_rate() {
        // 2000 * $0.000015 + 500 * $0.000075
        assert!((ClaudeClient::estimated_cost() - 0.0675).abs() < 1e-12);
    }

    #[tokio::test]
    async fn missing_key_is_a_config_error() {
        let client = ClaudeClient::new(ClaudeConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            model: "claude-3-opus-20240229".to_string(),
            max_tokens: 512,
            api_key: None,
            timeout_secs: 5,
        })
        .unwrap();
        let err = client.answer("q", "ctx").await.unwrap_err();
        assert!(err.is_config());
    }
}
