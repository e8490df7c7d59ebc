//! Content source strategies.
//!
//! The reader's iteration contract does not care where raw contents come
//! from. A [`ContentSource`] is a factory for fresh pull-based passes over
//! the corpus: the streaming implementation re-reads every file from disk
//! on each pass, while the in-memory implementation materializes contents
//! once, in parallel, and replays them on every pass.

use crate::error::{GleanError, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use tracing::debug;

/// A factory producing fresh pull-based passes of raw file contents.
///
/// Every call to [`pass`](ContentSource::pass) yields an independent cursor
/// over the whole corpus. Sources hold only write-once state, so concurrent
/// passes need no coordination.
pub(crate) trait ContentSource: Send + Sync {
    fn pass(&self) -> Box<dyn Iterator<Item = Result<String>> + '_>;
}

/// Streaming source: contents are read from disk anew on every pass.
///
/// One file is read per `next` call. The file handle lives only inside the
/// read itself, so abandoning a pass early never leaks an open handle. A
/// read failure surfaces as `Err` for the caller to handle.
pub(crate) struct DiskSource {
    files: Arc<[PathBuf]>,
}

impl DiskSource {
    pub(crate) fn new(files: Arc<[PathBuf]>) -> Self {
        DiskSource { files }
    }
}

impl ContentSource for DiskSource {
    fn pass(&self) -> Box<dyn Iterator<Item = Result<String>> + '_> {
        Box::new(self.files.iter().map(|path| read_content(path)))
    }
}

/// In-memory source: contents are materialized once and replayed per pass.
pub(crate) struct MemorySource {
    contents: Vec<String>,
}

impl MemorySource {
    /// Eagerly read every file, fanning the reads out across a worker pool.
    ///
    /// The pool holds one worker per available core minus one, but at least
    /// one. Each worker reads only its own files; a single failed read fails
    /// the whole materialization. Collected contents are sorted by their
    /// file's path before storage, so replay order is path order rather
    /// than match order.
    pub(crate) fn materialize(files: &[PathBuf]) -> Result<Self> {
        let workers = thread::available_parallelism()
            .map(|n| n.get().saturating_sub(1))
            .unwrap_or(1)
            .max(1);
        debug!(workers, files = files.len(), "Materializing corpus");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|e| GleanError::Internal(format!("failed to build worker pool: {}", e)))?;

        let mut read: Vec<(&Path, String)> = pool.install(|| {
            files
                .par_iter()
                .map(|path| read_content(path).map(|content| (path.as_path(), content)))
                .collect::<Result<Vec<_>>>()
        })?;

        read.sort_by(|a, b| a.0.cmp(b.0));

        let contents = read.into_iter().map(|(_, content)| content).collect();
        Ok(MemorySource { contents })
    }
}

impl ContentSource for MemorySource {
    fn pass(&self) -> Box<dyn Iterator<Item = Result<String>> + '_> {
        Box::new(self.contents.iter().cloned().map(Ok))
    }
}

/// Read one file to a string, attaching the path to any failure.
fn read_content(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| GleanError::read(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn collect(source: &dyn ContentSource) -> Vec<String> {
        source.pass().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn test_disk_source_rereads_every_pass() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "before").unwrap();

        let source = DiskSource::new(vec![path.clone()].into());
        assert_eq!(collect(&source), vec!["before".to_string()]);

        fs::write(&path, "after").unwrap();
        assert_eq!(collect(&source), vec!["after".to_string()]);
    }

    #[test]
    fn test_disk_source_surfaces_read_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.txt");

        let source = DiskSource::new(vec![path].into());
        let mut pass = source.pass();
        assert!(matches!(pass.next(), Some(Err(GleanError::Read { .. }))));
    }

    #[test]
    fn test_materialize_sorts_by_path() {
        let dir = TempDir::new().unwrap();
        let b = dir.path().join("b.txt");
        let a = dir.path().join("a.txt");
        fs::write(&b, "second").unwrap();
        fs::write(&a, "first").unwrap();

        // Input in match order b-then-a; replay is path order a-then-b.
        let source = MemorySource::materialize(&[b, a]).unwrap();
        assert_eq!(
            collect(&source),
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn test_materialize_fails_on_any_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.txt");
        fs::write(&good, "fine").unwrap();
        let missing = dir.path().join("missing.txt");

        let result = MemorySource::materialize(&[good, missing]);
        assert!(matches!(result, Err(GleanError::Read { .. })));
    }

    #[test]
    fn test_memory_source_replays_without_filesystem() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "kept").unwrap();

        let source = MemorySource::materialize(&[path.clone()]).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(collect(&source), vec!["kept".to_string()]);
        assert_eq!(collect(&source), vec!["kept".to_string()]);
    }
}
