//! Load the sample document set into the demo collection

use crate::progress::spawn_renderer;
use anyhow::Result;
use execbrief_core::{ProgressSink, ZeroEntropyClient};

pub async fn run(client: &ZeroEntropyClient) -> Result<()> {
    if !client.is_configured() {
        println!("No ZEROENTROPY_API_KEY set: running in demo mode.");
    }

    let (progress, rx) = ProgressSink::channel();
    let renderer = spawn_renderer(rx);

    let result = client.load_documents(&progress).await;
    drop(progress);
    renderer.await.ok();
    result?;

    println!(
        "Collection '{}' ready ({} documents).",
        client.collection_name(),
        client.documents().len()
    );
    Ok(())
}
