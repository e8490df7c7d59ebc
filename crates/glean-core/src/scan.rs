//! Corpus file resolution.
//!
//! Resolves a corpus description into the concrete list of files to read.
//! The cross-product of (directory, pattern) pairs is expanded through
//! filesystem globbing, directory-major and pattern-minor, optionally
//! descending into subdirectories at any depth.

use crate::config::CorpusConfig;
use crate::error::{GleanError, Result};
use glob::glob;
use std::path::PathBuf;
use tracing::debug;

/// Expand the description's (directory, pattern) cross-product into the
/// list of matching regular files.
///
/// Match order is preserved: directories in configuration order, each
/// expanded with every pattern in configuration order, entries within one
/// pair in the glob crate's alphabetical yield order. Duplicates are kept:
/// a file reachable through more than one pair appears once per match.
///
/// Only regular files are returned; directories and other entries matched
/// incidentally by a pattern are dropped.
pub fn resolve_files(config: &CorpusConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for dir in &config.directories {
        for pattern in &config.patterns {
            // `**` matches zero or more directories, so the recursive form
            // still covers the top level of `dir` itself.
            let expr = if config.recursive {
                dir.join("**").join(pattern)
            } else {
                dir.join(pattern)
            };
            let expr = expr.to_string_lossy().into_owned();
            debug!(glob = %expr, "Expanding");

            let entries = glob(&expr).map_err(|e| GleanError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;

            for entry in entries {
                let path = entry.map_err(|e| {
                    let path = e.path().to_path_buf();
                    GleanError::read(path, e.into_error())
                })?;
                if path.is_file() {
                    files.push(path);
                }
            }
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    /// source1: 1.txt, 2.txt, 3.msg; source2: 1.msg, 2.doc, 3.txt, 4.text
    fn two_sources() -> (TempDir, PathBuf, PathBuf) {
        let root = TempDir::new().unwrap();
        let source1 = root.path().join("source1");
        let source2 = root.path().join("source2");
        fs::create_dir(&source1).unwrap();
        fs::create_dir(&source2).unwrap();

        write(&source1, "1.txt", "one");
        write(&source1, "2.txt", "two");
        write(&source1, "3.msg", "three");
        write(&source2, "1.msg", "four");
        write(&source2, "2.doc", "five");
        write(&source2, "3.txt", "six");
        write(&source2, "4.text", "seven");

        (root, source1, source2)
    }

    #[test]
    fn test_cross_product_resolution() {
        let (_root, source1, source2) = two_sources();
        let config = CorpusConfig::new([&source1, &source2], ["*.txt", "*.msg"]);

        let files = resolve_files(&config).unwrap();

        // Directory-major, pattern-minor; 2.doc and 4.text match no pattern.
        assert_eq!(
            files,
            vec![
                source1.join("1.txt"),
                source1.join("2.txt"),
                source1.join("3.msg"),
                source2.join("3.txt"),
                source2.join("1.msg"),
            ]
        );
    }

    #[test]
    fn test_directories_excluded() {
        let root = TempDir::new().unwrap();
        let source = root.path().join("source");
        fs::create_dir(&source).unwrap();
        write(&source, "a.txt", "text");
        // A directory whose name matches the pattern must not be yielded.
        fs::create_dir(source.join("b.txt")).unwrap();

        let config = CorpusConfig::new([&source], ["*.txt"]);
        let files = resolve_files(&config).unwrap();

        assert_eq!(files, vec![source.join("a.txt")]);
    }

    #[test]
    fn test_recursive_matches_every_depth() {
        let root = TempDir::new().unwrap();
        let source = root.path().join("source");
        let sub = source.join("sub");
        let subsub = sub.join("subsub");
        fs::create_dir_all(&subsub).unwrap();

        write(&source, "top.txt", "top");
        write(&sub, "mid.txt", "mid");
        write(&subsub, "deep.txt", "deep");
        write(&subsub, "deep.doc", "skipped");

        let config = CorpusConfig::new([&source], ["*.txt"]).with_recursive(true);
        let mut files = resolve_files(&config).unwrap();
        files.sort();

        let mut expected = vec![
            source.join("top.txt"),
            sub.join("mid.txt"),
            subsub.join("deep.txt"),
        ];
        expected.sort();
        assert_eq!(files, expected);
    }

    #[test]
    fn test_non_recursive_ignores_subdirectories() {
        let root = TempDir::new().unwrap();
        let source = root.path().join("source");
        let sub = source.join("sub");
        fs::create_dir_all(&sub).unwrap();
        write(&source, "top.txt", "top");
        write(&sub, "mid.txt", "mid");

        let config = CorpusConfig::new([&source], ["*.txt"]);
        let files = resolve_files(&config).unwrap();

        assert_eq!(files, vec![source.join("top.txt")]);
    }

    #[test]
    fn test_overlapping_patterns_yield_duplicates() {
        let root = TempDir::new().unwrap();
        let source = root.path().join("source");
        fs::create_dir(&source).unwrap();
        write(&source, "1.txt", "one");

        // 1.txt matches both patterns and is listed once per match.
        let config = CorpusConfig::new([&source], ["*.txt", "1.*"]);
        let files = resolve_files(&config).unwrap();

        assert_eq!(files, vec![source.join("1.txt"), source.join("1.txt")]);
    }

    #[test]
    fn test_invalid_pattern() {
        let root = TempDir::new().unwrap();
        let config = CorpusConfig::new([root.path()], ["[unclosed"]);

        assert!(matches!(
            resolve_files(&config),
            Err(GleanError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_missing_directory_matches_nothing() {
        let root = TempDir::new().unwrap();
        let config = CorpusConfig::new([root.path().join("absent")], ["*.txt"]);

        let files = resolve_files(&config).unwrap();
        assert!(files.is_empty());
    }
}
