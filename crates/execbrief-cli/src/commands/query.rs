//! Ask a question and print the synthesized answer

use crate::app::QueryArgs;
use crate::progress::spawn_renderer;
use anyhow::{bail, Result};
use execbrief_core::{ProgressSink, QueryLifecycle, QueryPhase, ZeroEntropyClient};

pub async fn run(args: QueryArgs, client: &ZeroEntropyClient) -> Result<()> {
    let query = args.text();
    if query.trim().is_empty() {
        bail!("No query provided");
    }

    let mut lifecycle = QueryLifecycle::new();
    lifecycle.transition(QueryPhase::Starting);

    let (progress, rx) = ProgressSink::channel();
    let renderer = spawn_renderer(rx);

    lifecycle.transition(QueryPhase::Searching);
    let result = client.synthesize(&query, &progress).await;
    drop(progress);
    renderer.await.ok();

    match result {
        Ok(result) => {
            lifecycle.transition(QueryPhase::Processing);
            println!("{}\n", result.synthesis);
            println!("Confidence:         {:.2}", result.confidence_score);
            println!("Documents searched: {}", result.documents_searched);
            println!("Processing time:    {:.2}s", result.processing_time);
            println!("Query id:           {}", result.query_id);
            lifecycle.transition(QueryPhase::Completed);
            Ok(())
        }
        Err(e) => {
            lifecycle.transition(QueryPhase::Error(e.to_string()));
            bail!("{}", lifecycle.error_message().unwrap_or("query failed"));
        }
    }
}
