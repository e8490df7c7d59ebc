//! Scan command - resolve and list the corpus files.

use crate::OutputFormat;
use glean_core::{CorpusConfig, CorpusReader};

/// Run the scan command.
pub fn run(config: CorpusConfig, output: OutputFormat) -> anyhow::Result<()> {
    let reader = CorpusReader::new(config)?;

    match output {
        OutputFormat::Text => {
            for path in reader.files() {
                println!("{}", path.display());
            }

            eprintln!();
            eprintln!("{} files", reader.len());
        }
        OutputFormat::Json => {
            let files: Vec<String> = reader
                .files()
                .iter()
                .map(|p| p.display().to_string())
                .collect();

            let doc = serde_json::json!({
                "count": reader.len(),
                "files": files,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }

    Ok(())
}
