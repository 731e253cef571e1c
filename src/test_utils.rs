//! Test utilities: temporary directory trees and an in-memory filesystem.
//!
//! This module is only compiled for tests and benchmarks.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::tree::{DirEntry, EntryKind, FileSystem};

/// A temporary directory for building test trees.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add several empty files at once.
    pub fn add_files(&self, paths: &[&str]) {
        for path in paths {
            self.add_file(path, "");
        }
    }

    /// Add an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory [`FileSystem`] with directories that can be made unreadable.
///
/// Entries are returned in insertion order, which lets tests check that the
/// walker imposes its own ordering.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    dirs: HashMap<PathBuf, Vec<DirEntry>>,
    unreadable: HashSet<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating every ancestor directory.
    pub fn add_file(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
            return;
        };
        let entry = DirEntry::new(name, EntryKind::File);
        self.add_entry(parent, entry);
    }

    /// Add an empty directory, creating every ancestor.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        self.ensure_dir(path.as_ref());
    }

    /// Add a directory whose listing fails with `PermissionDenied`.
    pub fn add_unreadable_dir(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.ensure_dir(path);
        self.unreadable.insert(path.to_path_buf());
    }

    /// Add an arbitrary entry to a directory.
    pub fn add_entry(&mut self, dir: impl AsRef<Path>, entry: DirEntry) {
        let dir = dir.as_ref();
        self.ensure_dir(dir);
        self.push_entry(dir, entry);
    }

    fn ensure_dir(&mut self, path: &Path) {
        if self.dirs.contains_key(path) {
            return;
        }
        self.dirs.insert(path.to_path_buf(), Vec::new());
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            self.ensure_dir(parent);
            self.push_entry(
                parent,
                DirEntry::new(name, EntryKind::Directory),
            );
        }
    }

    fn push_entry(&mut self, dir: &Path, entry: DirEntry) {
        let entries = self.dirs.entry(dir.to_path_buf()).or_default();
        if !entries.iter().any(|e| e.file_name == entry.file_name) {
            entries.push(entry);
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Permission denied",
            ));
        }
        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "No such file or directory"))
    }
}
