//! Corpus configuration for Glean.
//!
//! A corpus is described by an ordered set of source directories and an
//! ordered set of shell-glob filename patterns, plus flags controlling
//! recursion, the read strategy, and progress logging. Descriptions can be
//! built in code or loaded from a TOML file.

use crate::error::{GleanError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Description of a corpus: where to look, what to match, how to read.
///
/// The directory and pattern lists are ordered and both must be non-empty;
/// [`validate`](CorpusConfig::validate) is called when a reader is built.
///
/// ## Example Configuration File (glean.toml)
///
/// ```toml
/// directories = ["data/source1", "data/source2"]
/// patterns = ["*.txt", "*.msg"]
/// recursive = true
/// in_memory = false
/// progress = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Source directories to search, in order
    pub directories: Vec<PathBuf>,

    /// Shell-glob filename patterns to match in each directory, in order
    pub patterns: Vec<String>,

    /// Apply every pattern in all subdirectories too, at any depth
    #[serde(default)]
    pub recursive: bool,

    /// Read the whole corpus once at construction and replay it from memory
    #[serde(default)]
    pub in_memory: bool,

    /// Emit progress log lines while resolving and iterating
    #[serde(default)]
    pub progress: bool,
}

impl CorpusConfig {
    /// Create a description for the given directories and patterns.
    ///
    /// Recursion, in-memory reading, and progress logging all default to
    /// off; use the `with_*` setters to enable them.
    pub fn new<D, P>(directories: D, patterns: P) -> Self
    where
        D: IntoIterator,
        D::Item: Into<PathBuf>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        CorpusConfig {
            directories: directories.into_iter().map(Into::into).collect(),
            patterns: patterns.into_iter().map(Into::into).collect(),
            recursive: false,
            in_memory: false,
            progress: false,
        }
    }

    /// Set whether patterns are applied in subdirectories at any depth.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set whether contents are materialized once and replayed from memory.
    pub fn with_in_memory(mut self, in_memory: bool) -> Self {
        self.in_memory = in_memory;
        self
    }

    /// Set whether progress log lines are emitted.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Check that the description is structurally valid.
    pub fn validate(&self) -> Result<()> {
        if self.directories.is_empty() {
            return Err(GleanError::config("no source directories configured"));
        }
        if self.patterns.is_empty() {
            return Err(GleanError::config("no glob patterns configured"));
        }
        Ok(())
    }

    /// Load a corpus description from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GleanError::config(format!(
                "corpus file not found: {}",
                path.display()
            )));
        }

        info!(path = %path.display(), "Loading corpus description");
        let contents = fs::read_to_string(path)?;
        let config: CorpusConfig = toml::from_str(&contents).map_err(|e| GleanError::Config {
            reason: format!("Failed to parse corpus file: {}", e),
        })?;

        Ok(config)
    }

    /// Save the corpus description to a TOML file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        debug!(path = %path.display(), "Saving corpus description");
        let contents = toml::to_string_pretty(self).map_err(|e| GleanError::Config {
            reason: format!("Failed to serialize corpus file: {}", e),
        })?;

        fs::write(path, contents)?;
        Ok(())
    }
}
