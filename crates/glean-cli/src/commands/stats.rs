//! Stats command - summarize the corpus.

use crate::OutputFormat;
use glean_core::{CorpusConfig, CorpusReader};
use std::time::Instant;

/// Run the stats command.
pub fn run(config: CorpusConfig, output: OutputFormat) -> anyhow::Result<()> {
    let reader = CorpusReader::new(config)?;

    let start = Instant::now();
    let mut documents = 0usize;
    let mut bytes = 0u64;
    for doc in &reader {
        let content = doc?;
        documents += 1;
        bytes += content.len() as u64;
    }
    let elapsed = start.elapsed();

    // File-list entries that never reached the consumer had empty content.
    let skipped = reader.len() - documents;

    match output {
        OutputFormat::Text => {
            println!("files:     {}", reader.len());
            println!("documents: {}", documents);
            println!("skipped:   {} (empty)", skipped);
            println!("bytes:     {}", bytes);

            eprintln!();
            eprintln!(
                "Read {} documents in {:.3}ms",
                documents,
                elapsed.as_secs_f64() * 1000.0
            );
        }
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "files": reader.len(),
                "documents": documents,
                "skipped_empty": skipped,
                "bytes": bytes,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }

    Ok(())
}
