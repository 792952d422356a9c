//! ExecBrief Core Library
//!
//! Client-side orchestration for the ExecBrief knowledge-synthesis demo.
//!
//! # Features
//! - ZeroEntropy document-search API client (collections, documents, status,
//!   top-K snippet queries) with bearer authentication
//! - Demo-mode fallback producing canned narratives when no API key is set
//! - Live synthesis formatting from scored snippets with keyword routing
//! - Claude messages-API client for the pipeline comparison
//! - Comparison harness racing both strategies with timing and cost estimates

pub mod claude;
pub mod comparison;
pub mod config;
pub mod documents;
pub mod error;
pub mod progress;
pub mod synthesis;
pub mod workflow;
pub mod zeroentropy;

pub use claude::{ClaudeAnswer, ClaudeClient};
pub use comparison::{
    run_comparison, total_cost, ClaudeEngine, ComparisonEngine, ComparisonOutcome, ComparisonRun,
    ZeroEntropyEngine,
};
pub use config::{ClaudeConfig, ZeroEntropyConfig};
pub use documents::{sample_documents, Document, SAMPLE_DOCUMENT_COUNT};
pub use error::{Error, ExecBriefError, Result};
pub use progress::{ProgressEvent, ProgressSink};
pub use synthesis::{demo_synthesis, synthesize_from_snippets, Topic};
pub use workflow::{simulate_baseline, QueryLifecycle, QueryPhase};
pub use zeroentropy::{IndexingStatus, Snippet, SynthesisResult, ZeroEntropyClient};
