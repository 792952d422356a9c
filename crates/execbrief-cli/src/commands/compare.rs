//! Race ZeroEntropy against the Claude pipeline for one question

use crate::app::QueryArgs;
use crate::progress::spawn_renderer;
use anyhow::{bail, Result};
use execbrief_core::{
    run_comparison, simulate_baseline, total_cost, ClaudeClient, ClaudeEngine, ComparisonEngine,
    ProgressSink, QueryLifecycle, QueryPhase, ZeroEntropyClient, ZeroEntropyEngine,
};
use std::sync::Arc;

pub async fn run(
    args: QueryArgs,
    zeroentropy: Arc<ZeroEntropyClient>,
    claude: Arc<ClaudeClient>,
) -> Result<()> {
    let query = args.text();
    if query.trim().is_empty() {
        bail!("No query provided");
    }

    let mut lifecycle = QueryLifecycle::new();
    lifecycle.transition(QueryPhase::Starting);

    // Baseline: the simulated "retrieve everything" pipeline.
    lifecycle.transition(QueryPhase::SimulatingBaseline);
    let (progress, rx) = ProgressSink::channel();
    let renderer = spawn_renderer(rx);
    let baseline_secs = simulate_baseline(&progress).await;
    drop(progress);
    renderer.await.ok();

    lifecycle.transition(QueryPhase::Searching);
    let engines: Vec<Arc<dyn ComparisonEngine>> = vec![
        Arc::new(ZeroEntropyEngine::new(zeroentropy.clone())),
        Arc::new(ClaudeEngine::new(zeroentropy, claude)),
    ];
    let runs = run_comparison(&engines, &query).await;

    lifecycle.transition(QueryPhase::Processing);
    println!("Baseline (simulated traditional pipeline): {:.1}s\n", baseline_secs);
    for run in &runs {
        println!("=== {} ===", run.engine);
        println!("{}\n", run.outcome.answer);
        println!(
            "  time: {:.2}s   cost: ${:.4}   documents: {}{}",
            run.outcome.time,
            run.outcome.cost,
            run.outcome.docs_used,
            if run.succeeded { "" } else { "   (failed)" }
        );
        if run.succeeded && run.outcome.time > 0.0 {
            println!("  speedup vs baseline: {:.1}x", baseline_secs / run.outcome.time);
        }
        println!();
    }
    println!("Total estimated cost (successful runs): ${:.4}", total_cost(&runs));

    lifecycle.transition(QueryPhase::Completed);
    Ok(())
}
