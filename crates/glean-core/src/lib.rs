//! # Glean Core Library
//!
//! This crate provides the corpus resolution and reading functionality for
//! the Glean corpus tool. A corpus is a set of plaintext files spread
//! across multiple directories, selected by shell-glob filename patterns;
//! the reader yields each file's content, optionally transformed by a
//! caller-supplied function, for downstream consumption such as training a
//! text model.
//!
//! ## Architecture
//!
//! - **Config** (`config`): corpus description (directories, patterns, flags)
//! - **Scan** (`scan`): glob resolution of the corpus file list
//! - **Source** (`source`): streaming and in-memory content strategies
//! - **Reader** (`reader`): restartable passes with transform application
//!   and empty-content filtering
//!
//! ## Example
//!
//! ```rust,ignore
//! use glean_core::{CorpusConfig, CorpusReader};
//!
//! let config = CorpusConfig::new(["data/source1", "data/source2"], ["*.txt", "*.msg"]);
//! let reader = CorpusReader::new(config)?;
//! println!("{} files", reader.len());
//! for doc in &reader {
//!     consume(doc?);
//! }
//! ```

pub mod config;
pub mod error;
pub mod reader;
pub mod scan;
mod source;

// Re-export commonly used types
pub use config::CorpusConfig;
pub use error::{GleanError, Result};
pub use reader::{CorpusReader, Documents};
pub use scan::resolve_files;
