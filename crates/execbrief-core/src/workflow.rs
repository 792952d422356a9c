//! Query submission lifecycle and the traditional-pipeline baseline
//!
//! The lifecycle is presentation-facing: the caller drives transitions while
//! draining progress events. The only invariant is that a submission reaches
//! exactly one terminal phase, and an error phase keeps its message for
//! display. Cancellation is not supported; a started call runs to completion
//! or failure.

use crate::progress::ProgressSink;
use std::time::Duration;

/// Phase of one query submission.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryPhase {
    Idle,
    Starting,
    /// Optional: only the comparison flow simulates the baseline pipeline.
    SimulatingBaseline,
    Searching,
    Processing,
    Completed,
    Error(String),
}

impl QueryPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, QueryPhase::Completed | QueryPhase::Error(_))
    }
}

/// Tracks the lifecycle of a single query submission.
#[derive(Debug)]
pub struct QueryLifecycle {
    phase: QueryPhase,
}

impl Default for QueryLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryLifecycle {
    pub fn new() -> Self {
        Self {
            phase: QueryPhase::Idle,
        }
    }

    pub fn phase(&self) -> &QueryPhase {
        &self.phase
    }

    /// Move to a new phase. Transitions out of a terminal phase are refused
    /// so a submission ends in exactly one of `Completed` or `Error`.
    pub fn transition(&mut self, next: QueryPhase) -> bool {
        if self.phase.is_terminal() {
            return false;
        }
        self.phase = next;
        true
    }

    /// The preserved error message, when the submission failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            QueryPhase::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Simulate the traditional "retrieve everything, run it through an LLM"
/// pipeline: three fixed waits announced via progress. Returns the elapsed
/// time in seconds, used as the baseline for the speedup comparison.
pub async fn simulate_baseline(progress: &ProgressSink) -> f64 {
    let start = tokio::time::Instant::now();

    progress.report(0.0, "Traditional Pipeline: Retrieving all documents...");
    tokio::time::sleep(Duration::from_millis(2000)).await;

    progress.report(40.0, "Traditional Pipeline: Processing with Claude...");
    tokio::time::sleep(Duration::from_millis(3500)).await;

    progress.report(90.0, "Traditional Pipeline: Formatting response...");
    tokio::time::sleep(Duration::from_millis(800)).await;

    start.elapsed().as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_completed() {
        let mut lifecycle = QueryLifecycle::new();
        assert_eq!(lifecycle.phase(), &QueryPhase::Idle);
        assert!(lifecycle.transition(QueryPhase::Starting));
        assert!(lifecycle.transition(QueryPhase::Searching));
        assert!(lifecycle.transition(QueryPhase::Processing));
        assert!(lifecycle.transition(QueryPhase::Completed));
        assert!(lifecycle.phase().is_terminal());
    }

    #[test]
    fn error_preserves_message_and_blocks_further_transitions() {
        let mut lifecycle = QueryLifecycle::new();
        lifecycle.transition(QueryPhase::Starting);
        lifecycle.transition(QueryPhase::Error("Upstream error (HTTP 500): boom".into()));

        assert_eq!(
            lifecycle.error_message(),
            Some("Upstream error (HTTP 500): boom")
        );
        // Terminal phase is final: no second terminal state.
        assert!(!lifecycle.transition(QueryPhase::Completed));
        assert!(lifecycle.error_message().is_some());
    }

    #[test]
    fn baseline_phase_is_optional() {
        let mut lifecycle = QueryLifecycle::new();
        lifecycle.transition(QueryPhase::Starting);
        lifecycle.transition(QueryPhase::SimulatingBaseline);
        lifecycle.transition(QueryPhase::Searching);
        lifecycle.transition(QueryPhase::Completed);
        assert!(lifecycle.phase().is_terminal());
    }

    #[tokio::test(start_paused = true)]
    async fn baseline_simulation_takes_the_fixed_phases() {
        let (sink, mut rx) = ProgressSink::channel();
        let elapsed = simulate_baseline(&sink).await;
        drop(sink);

        // 2.0 + 3.5 + 0.8 seconds of simulated work
        assert!(elapsed >= 6.3);

        let mut messages = Vec::new();
        while let Some(event) = rx.recv().await {
            messages.push(event.message);
        }
        assert_eq!(messages.len(), 3);
        assert!(messages[0].contains("Retrieving all documents"));
        assert!(messages[1].contains("Processing with Claude"));
        assert!(messages[2].contains("Formatting response"));
    }
}
