//! Stream command - print document contents.

use glean_core::{CorpusConfig, CorpusReader};

/// Run the stream command.
///
/// With `summary` set, prints one line per document instead of its full
/// content. A read failure aborts the stream with the failing path.
pub fn run(config: CorpusConfig, summary: bool) -> anyhow::Result<()> {
    let reader = CorpusReader::new(config)?;

    for (i, doc) in reader.iter().enumerate() {
        let content = doc?;
        if summary {
            println!(
                "doc {}: {} bytes, {} lines",
                i,
                content.len(),
                content.lines().count()
            );
        } else {
            print!("{}", content);
        }
    }

    Ok(())
}
