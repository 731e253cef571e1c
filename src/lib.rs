//! Dmitree - a directory tree viewer that collapses numbered files into groups

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod pattern;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{Config, ConfigError};
pub use error::WalkError;
pub use output::{ColorRules, OutputConfig, StreamingFormatter};
pub use pattern::{extract_pattern, has_numbers};
pub use tree::{
    FileSystem, IgnoreRules, OsFileSystem, TreeLine, TreeSink, TreeWalker, WalkSummary,
    WalkerConfig,
};
