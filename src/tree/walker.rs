//! TreeWalker - streams grouped tree lines to a sink

use std::io;
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::error::WalkError;
use crate::pattern::has_numbers;

use super::config::WalkerConfig;
use super::filter::is_hidden;
use super::fs::{DirEntry, EntryKind, FileSystem, OsFileSystem};
use super::group::GroupMap;
use super::sink::{TreeLine, TreeSink, WalkSummary};

/// Recursive, depth-first directory walker.
///
/// Within a directory, entries are handled in one pass in name order:
/// subdirectories are descended into as soon as they are reached, files
/// without digits are emitted immediately, and numbered files are gathered
/// into shape groups that are emitted once the listing is exhausted.
pub struct TreeWalker<F = OsFileSystem> {
    config: WalkerConfig,
    fs: F,
}

impl TreeWalker<OsFileSystem> {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            fs: OsFileSystem,
        }
    }
}

impl<F: FileSystem> TreeWalker<F> {
    /// Replace the filesystem the walker lists directories from.
    pub fn with_filesystem<G: FileSystem>(self, fs: G) -> TreeWalker<G> {
        TreeWalker {
            config: self.config,
            fs,
        }
    }

    /// Walk `root`, sending every line to `sink`.
    ///
    /// Fails only if the root itself cannot be listed or the sink fails.
    /// Unreadable subdirectories are reported inline and collected in the
    /// returned summary.
    pub fn walk<S: TreeSink>(&self, root: &Path, sink: &mut S) -> Result<WalkSummary, WalkError> {
        let entries = self
            .list(root)
            .map_err(|source| WalkError::RootUnreadable {
                path: root.to_path_buf(),
                source,
            })?;

        sink.begin(root)?;

        let mut summary = WalkSummary::default();
        self.render_entries(root, 0, entries, sink, &mut summary)?;

        sink.finish(&summary)?;
        debug!(
            directories = summary.directories,
            files = summary.files,
            failures = summary.failures.len(),
            "walk finished"
        );
        Ok(summary)
    }

    fn walk_dir<S: TreeSink>(
        &self,
        path: &Path,
        entry: &DirEntry,
        depth: usize,
        sink: &mut S,
        summary: &mut WalkSummary,
    ) -> Result<(), WalkError> {
        if self.config.exceeds_depth(depth) {
            trace!(path = %path.display(), depth, "beyond depth limit");
            return Ok(());
        }

        sink.line(&TreeLine::Dir {
            name: entry.name.clone(),
            depth,
        })?;
        summary.directories += 1;

        // Links to directories are shown but not followed
        if entry.kind == EntryKind::SymlinkDir {
            return Ok(());
        }

        match self.list(path) {
            Ok(entries) => self.render_entries(path, depth, entries, sink, summary),
            Err(source) => {
                warn!(path = %path.display(), error = %source, "cannot open directory");
                sink.line(&TreeLine::Error {
                    message: source.to_string(),
                    depth: content_indent(depth),
                })?;
                summary.failures.push(WalkError::SubtreeUnreadable {
                    path: path.to_path_buf(),
                    source,
                });
                Ok(())
            }
        }
    }

    fn render_entries<S: TreeSink>(
        &self,
        path: &Path,
        depth: usize,
        entries: Vec<DirEntry>,
        sink: &mut S,
        summary: &mut WalkSummary,
    ) -> Result<(), WalkError> {
        let indent = content_indent(depth);
        let mut groups = GroupMap::new();

        for entry in entries {
            if entry.is_dir() {
                self.walk_dir(&path.join(&entry.file_name), &entry, depth + 1, sink, summary)?;
                continue;
            }

            if !self.config.include_files() {
                continue;
            }

            if has_numbers(&entry.name) {
                groups.insert(&entry.name);
            } else {
                sink.line(&TreeLine::File {
                    name: entry.name,
                    depth: indent,
                })?;
                summary.files += 1;
            }
        }

        for group in groups.into_groups() {
            summary.files += group.count;
            let line = if group.count > 1 {
                TreeLine::Group {
                    shape: group.shape,
                    count: group.count,
                    depth: indent,
                }
            } else {
                TreeLine::File {
                    name: group.representative,
                    depth: indent,
                }
            };
            sink.line(&line)?;
        }

        Ok(())
    }

    /// List, filter and sort the children of a directory.
    fn list(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = self.fs.read_dir(path)?;
        entries.retain(|e| self.is_visible(&e.name));
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn is_visible(&self, name: &str) -> bool {
        if !self.config.show_hidden && is_hidden(name) {
            return false;
        }
        !self.config.ignore.is_ignored(name)
    }
}

/// Indentation level for the contents of a directory at `depth`.
///
/// A header at depth N is indented N levels and its contents one level
/// further. The root has no header, so its contents start at level 0.
fn content_indent(depth: usize) -> usize {
    if depth == 0 { 0 } else { depth + 1 }
}
