//! Error types for tree walking

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while walking a directory tree.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The starting directory could not be listed. Fatal.
    #[error("cannot open '{}': {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A nested directory could not be listed. The walk continues without it.
    #[error("cannot open '{}': {source}", path.display())]
    SubtreeUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output sink failed.
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl WalkError {
    /// Path of the directory that failed, if the error concerns one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            WalkError::RootUnreadable { path, .. } | WalkError::SubtreeUnreadable { path, .. } => {
                Some(path)
            }
            WalkError::Output(_) => None,
        }
    }

    /// Whether the output reader went away, as with `dmitree | head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, WalkError::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
