//! # Glean CLI
//!
//! Command-line interface for the Glean corpus reader.
//!
//! ## Commands
//!
//! - `glean scan` - Resolve and list the corpus files
//! - `glean stream` - Stream document contents to stdout
//! - `glean stats` - Summarize the corpus without printing contents
//!
//! ## Example Usage
//!
//! ```bash
//! # List everything the corpus description matches
//! glean --corpus glean.toml scan
//!
//! # Stream two directories' text files, reading everything up front
//! glean -d data/source1 -d data/source2 -p '*.txt' -p '*.msg' stream --in-memory
//!
//! # Corpus summary as JSON
//! glean -d data -p '*.txt' -r stats -o json
//! ```

mod commands;

use clap::{Parser, Subcommand};
use glean_core::CorpusConfig;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Glean - stream text corpora from multiple directories
#[derive(Parser)]
#[command(name = "glean")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML corpus description
    #[arg(short, long, global = true)]
    corpus: Option<PathBuf>,

    /// Source directory (repeatable)
    #[arg(short, long, global = true)]
    dir: Vec<PathBuf>,

    /// Filename glob pattern (repeatable)
    #[arg(short, long, global = true)]
    pattern: Vec<String>,

    /// Apply patterns in subdirectories too, at any depth
    #[arg(short, long, global = true)]
    recursive: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and list the corpus files
    Scan {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Stream document contents to stdout
    Stream {
        /// Read the whole corpus into memory before streaming
        #[arg(short, long)]
        in_memory: bool,

        /// Print a per-document summary line instead of full contents
        #[arg(short, long)]
        summary: bool,

        /// Log progress every 10,000 documents
        #[arg(long)]
        progress: bool,
    },

    /// Summarize the corpus without printing contents
    Stats {
        /// Read the whole corpus into memory first
        #[arg(short, long)]
        in_memory: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .init();

    let config = corpus_config(&cli)?;

    // Execute command
    match cli.command {
        Commands::Scan { output } => commands::scan::run(config, output),
        Commands::Stream {
            in_memory,
            summary,
            progress,
        } => commands::stream::run(
            config.with_in_memory(in_memory).with_progress(progress),
            summary,
        ),
        Commands::Stats { in_memory, output } => {
            commands::stats::run(config.with_in_memory(in_memory), output)
        }
    }
}

/// Build the corpus description from a TOML file or from the flags.
///
/// `--dir`/`--pattern` and `--recursive` refine a loaded file; on their own
/// they are the whole description.
fn corpus_config(cli: &Cli) -> anyhow::Result<CorpusConfig> {
    let mut config = match &cli.corpus {
        Some(path) => CorpusConfig::load_from(path)?,
        None => CorpusConfig::new(cli.dir.clone(), cli.pattern.clone()),
    };

    if cli.corpus.is_some() {
        config.directories.extend(cli.dir.iter().cloned());
        config.patterns.extend(cli.pattern.iter().cloned());
    }
    if cli.recursive {
        config = config.with_recursive(true);
    }

    Ok(config)
}
