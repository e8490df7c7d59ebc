//! The corpus reader.
//!
//! [`CorpusReader`] resolves a corpus description into a fixed file list at
//! construction time and produces restartable passes over the files'
//! contents. The list never changes after construction; every pass walks
//! the same corpus.
//!
//! ## Read strategies
//!
//! - **Streaming** (default): every pass re-opens and re-reads each file
//!   from disk, one file per pull.
//! - **In-memory** (`in_memory` in the description): all contents are read
//!   once at construction, in parallel, and every pass replays the stored
//!   contents without touching the filesystem.
//!
//! Streaming passes yield in match order (directory-major, pattern-minor);
//! in-memory passes replay in file-path order. The two orders may differ
//! for the same description.

use crate::config::CorpusConfig;
use crate::error::Result;
use crate::scan::resolve_files;
use crate::source::{ContentSource, DiskSource, MemorySource};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Interval between progress log lines during a pass.
const PROGRESS_EVERY: usize = 10_000;

/// Reads a text corpus spread across multiple directories.
///
/// `T` is the item type a pass yields. Without a transform it is the raw
/// file content (`String`); with one it is whatever the transform returns.
///
/// ## Example
///
/// ```rust,ignore
/// use glean_core::{CorpusConfig, CorpusReader};
///
/// let config = CorpusConfig::new(["data/source1", "data/source2"], ["*.txt", "*.msg"]);
/// let reader = CorpusReader::with_transform(config, |text| {
///     text.split_whitespace().map(str::to_owned).collect::<Vec<_>>()
/// })?;
/// for tokens in &reader {
///     train(tokens?);
/// }
/// ```
pub struct CorpusReader<T = String> {
    config: CorpusConfig,
    files: Arc<[PathBuf]>,
    source: Box<dyn ContentSource>,
    transform: Box<dyn Fn(String) -> T + Send + Sync>,
}

impl CorpusReader {
    /// Build a reader that yields raw file contents.
    ///
    /// Resolves the file list immediately; with `in_memory` set this also
    /// reads every file before returning.
    pub fn new(config: CorpusConfig) -> Result<Self> {
        Self::build(config, |content| content)
    }
}

impl<T> CorpusReader<T> {
    /// Build a reader that passes every non-empty content through
    /// `transform` and yields its return value.
    ///
    /// The transform runs once per non-empty content per pass. Whole-file
    /// empty content is skipped before the transform, so it never sees an
    /// empty string.
    pub fn with_transform<F>(config: CorpusConfig, transform: F) -> Result<Self>
    where
        F: Fn(String) -> T + Send + Sync + 'static,
    {
        Self::build(config, transform)
    }

    fn build<F>(config: CorpusConfig, transform: F) -> Result<Self>
    where
        F: Fn(String) -> T + Send + Sync + 'static,
    {
        config.validate()?;

        let files: Arc<[PathBuf]> = resolve_files(&config)?.into();
        if config.progress {
            info!(count = files.len(), "Resolved corpus files");
        }

        let source: Box<dyn ContentSource> = if config.in_memory {
            Box::new(MemorySource::materialize(&files)?)
        } else {
            Box::new(DiskSource::new(Arc::clone(&files)))
        };

        Ok(CorpusReader {
            config,
            files,
            source,
            transform: Box::new(transform),
        })
    }

    /// The resolved file list, in match order. Duplicate matches appear
    /// once per match.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Number of entries in the file list.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if no files matched the description.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The description this reader was built from.
    pub fn config(&self) -> &CorpusConfig {
        &self.config
    }

    /// Start a fresh pass over the corpus.
    ///
    /// Every call returns an independent cursor; passes may run
    /// concurrently, and a new pass can start while another is mid-flight.
    pub fn iter(&self) -> Documents<'_, T> {
        Documents {
            raw: self.source.pass(),
            transform: self.transform.as_ref(),
            progress: self.config.progress,
            pos: 0,
            failed: false,
        }
    }
}

impl<'a, T> IntoIterator for &'a CorpusReader<T> {
    type Item = Result<T>;
    type IntoIter = Documents<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single pass over the corpus.
///
/// Yields one item per non-empty file content. A read failure is yielded
/// once as `Err` and ends the pass; items yielded before the failure remain
/// valid.
pub struct Documents<'a, T> {
    raw: Box<dyn Iterator<Item = Result<String>> + 'a>,
    transform: &'a (dyn Fn(String) -> T + Send + Sync),
    progress: bool,
    pos: usize,
    failed: bool,
}

impl<T> Iterator for Documents<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let item = self.raw.next()?;
            let pos = self.pos;
            self.pos += 1;

            // Position counts pulls from the source, including contents the
            // empty-content filter drops below.
            if self.progress && pos > 0 && pos % PROGRESS_EVERY == 0 {
                info!(read = pos, "Corpus pass progress");
            }

            match item {
                Ok(content) => {
                    // Readable-but-empty files are filtered, not errors.
                    if content.is_empty() {
                        continue;
                    }
                    return Some(Ok((self.transform)(content)));
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
