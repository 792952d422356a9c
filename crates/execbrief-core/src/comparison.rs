//! Comparison harness
//!
//! Races two answer strategies against the same query: ZeroEntropy's own
//! synthesis versus ZeroEntropy snippets piped through Claude. Each strategy
//! is timed independently and carries a cost estimate; a failed strategy
//! reports its error text in place of an answer instead of failing the run.

use crate::claude::ClaudeClient;
use crate::documents::SAMPLE_DOCUMENT_COUNT;
use crate::error::Result;
use crate::progress::ProgressSink;
use crate::zeroentropy::ZeroEntropyClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Flat per-query cost estimate for a direct ZeroEntropy synthesis.
const ZEROENTROPY_QUERY_COST: f64 = 0.01;

/// Fallback per-query cost when the Claude leg reports none.
const CLAUDE_FALLBACK_COST: f64 = 0.12;

/// Metrics for one strategy's answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    pub answer: String,
    /// Elapsed wall-clock seconds.
    pub time: f64,
    /// Estimated dollars for the call.
    pub cost: f64,
    pub docs_used: usize,
}

/// One engine's entry in a comparison run, keyed by engine name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRun {
    pub engine: String,
    #[serde(flatten)]
    pub outcome: ComparisonOutcome,
    pub succeeded: bool,
}

/// An answer strategy that can be raced against others.
#[async_trait]
pub trait ComparisonEngine: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self, query: &str) -> Result<ComparisonOutcome>;
}

/// Direct ZeroEntropy synthesis.
pub struct ZeroEntropyEngine {
    client: Arc<ZeroEntropyClient>,
}

impl ZeroEntropyEngine {
    pub fn new(client: Arc<ZeroEntropyClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ComparisonEngine for ZeroEntropyEngine {
    fn name(&self) -> &str {
        "ZeroEntropy"
    }

    async fn run(&self, query: &str) -> Result<ComparisonOutcome> {
        let start = Instant::now();
        let result = self.client.synthesize(query, &ProgressSink::discard()).await?;
        Ok(ComparisonOutcome {
            answer: result.synthesis,
            time: start.elapsed().as_secs_f64(),
            cost: ZEROENTROPY_QUERY_COST,
            docs_used: result.documents_searched,
        })
    }
}

/// ZeroEntropy snippets as context, answered by Claude. Only the Claude leg
/// is timed; the context fetch is shared setup.
pub struct ClaudeEngine {
    zeroentropy: Arc<ZeroEntropyClient>,
    claude: Arc<ClaudeClient>,
}

impl ClaudeEngine {
    pub fn new(zeroentropy: Arc<ZeroEntropyClient>, claude: Arc<ClaudeClient>) -> Self {
        Self { zeroentropy, claude }
    }
}

#[async_trait]
impl ComparisonEngine for ClaudeEngine {
    fn name(&self) -> &str {
        "Claude"
    }

    async fn run(&self, query: &str) -> Result<ComparisonOutcome> {
        let context = self
            .zeroentropy
            .synthesize(query, &ProgressSink::discard())
            .await?
            .synthesis;

        let start = Instant::now();
        let answer = self.claude.answer(query, &context).await?;
        let cost = if answer.cost > 0.0 {
            answer.cost
        } else {
            CLAUDE_FALLBACK_COST
        };

        Ok(ComparisonOutcome {
            answer: answer.synthesis,
            time: start.elapsed().as_secs_f64(),
            cost,
            docs_used: SAMPLE_DOCUMENT_COUNT,
        })
    }
}

/// Run every engine against the same query concurrently. Engines fail
/// independently: a failed engine contributes an entry whose answer is the
/// error text, with the elapsed time and zero cost.
pub async fn run_comparison(
    engines: &[Arc<dyn ComparisonEngine>],
    query: &str,
) -> Vec<ComparisonRun> {
    let futures = engines.iter().map(|engine| async move {
        let start = Instant::now();
        match engine.run(query).await {
            Ok(outcome) => ComparisonRun {
                engine: engine.name().to_string(),
                outcome,
                succeeded: true,
            },
            Err(e) => ComparisonRun {
                engine: engine.name().to_string(),
                outcome: ComparisonOutcome {
                    answer: e.to_string(),
                    time: start.elapsed().as_secs_f64(),
                    cost: 0.0,
                    docs_used: 0,
                },
                succeeded: false,
            },
        }
    });

    futures::future::join_all(futures).await
}

/// Total estimated cost of the successful entries only.
pub fn total_cost(runs: &[ComparisonRun]) -> f64 {
    runs.iter()
        .filter(|run| run.succeeded)
        .map(|run| run.outcome.cost)
        .sum()
}
