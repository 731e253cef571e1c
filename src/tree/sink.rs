//! Lines emitted by the walker and the trait that receives them

use std::io;
use std::path::Path;

use crate::error::WalkError;

/// One rendered line of the tree.
///
/// `depth` is the indentation level of the line. Files of the root sit at
/// 0, a subdirectory header at its own depth below the root, and the
/// contents of that subdirectory one level further in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeLine {
    /// Header for a subdirectory.
    Dir { name: String, depth: usize },
    /// A file printed by its own name.
    File { name: String, depth: usize },
    /// Several files collapsed under one shape.
    Group {
        shape: String,
        count: usize,
        depth: usize,
    },
    /// A directory whose contents could not be listed.
    Error { message: String, depth: usize },
}

impl TreeLine {
    pub fn depth(&self) -> usize {
        match self {
            TreeLine::Dir { depth, .. }
            | TreeLine::File { depth, .. }
            | TreeLine::Group { depth, .. }
            | TreeLine::Error { depth, .. } => *depth,
        }
    }
}

/// Totals for a finished walk.
#[derive(Debug, Default)]
pub struct WalkSummary {
    /// Subdirectory headers shown.
    pub directories: usize,
    /// Files represented in the output, counting every member of a group.
    pub files: usize,
    /// Subtrees that could not be listed.
    pub failures: Vec<WalkError>,
}

/// Receiver for walker output.
pub trait TreeSink {
    /// Called once the root has been listed successfully, before any line.
    fn begin(&mut self, _root: &Path) -> io::Result<()> {
        Ok(())
    }

    fn line(&mut self, line: &TreeLine) -> io::Result<()>;

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        Ok(())
    }
}

/// Collects lines in memory.
impl TreeSink for Vec<TreeLine> {
    fn line(&mut self, line: &TreeLine) -> io::Result<()> {
        self.push(line.clone());
        Ok(())
    }
}
