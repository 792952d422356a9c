//! Show indexing status of the demo collection

use anyhow::Result;
use execbrief_core::ZeroEntropyClient;

pub async fn run(client: &ZeroEntropyClient) -> Result<()> {
    if !client.is_configured() {
        println!("Demo mode (no API key): no hosted collection to report on.");
        println!("Sample documents available: {}", client.documents().len());
        return Ok(());
    }

    let status = client.check_status().await?;
    println!("Collection: {}", client.collection_name());
    println!("  Documents: {}", status.num_documents);
    println!("  Parsing:   {}", status.num_parsing_documents);
    println!("  Indexing:  {}", status.num_indexing_documents);
    println!("  Indexed:   {}", status.num_indexed_documents);
    println!("  Failed:    {}", status.num_failed_documents);

    let collections = client.get_collections().await?;
    println!("Collections on account: {}", collections.join(", "));
    Ok(())
}
