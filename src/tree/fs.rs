//! Filesystem access used by the walker
//!
//! The walker only sees directory listings through the [`FileSystem`] trait,
//! so platform differences stay here and tests can substitute an in-memory
//! implementation.

use std::ffi::OsString;
use std::io;
use std::path::Path;

use tracing::debug;

/// What kind of entry a directory child is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// A symbolic link that resolves to a directory. Shown but never descended.
    SymlinkDir,
    /// Regular files and anything else that is not a directory.
    File,
}

/// One child of a listed directory.
///
/// `name` is the lossy UTF-8 form used for display, sorting and grouping.
/// Paths are always rebuilt from `file_name`, which keeps the exact bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub file_name: OsString,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(file_name: impl Into<OsString>, kind: EntryKind) -> Self {
        let file_name = file_name.into();
        Self {
            name: file_name.to_string_lossy().into_owned(),
            file_name,
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory | EntryKind::SymlinkDir)
    }
}

/// Source of directory listings.
pub trait FileSystem {
    /// List the immediate children of `path`, excluding `.` and `..`.
    ///
    /// Order is whatever the underlying source yields; callers sort.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();

        for entry in std::fs::read_dir(path)? {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    debug!(dir = %path.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let entry_path = entry.path();
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    debug!(path = %entry_path.display(), error = %e, "skipping entry without type");
                    continue;
                }
            };

            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_symlink() {
                // Follow the link to classify the target, like stat(2)
                match std::fs::metadata(&entry_path) {
                    Ok(m) if m.is_dir() => EntryKind::SymlinkDir,
                    Ok(_) => EntryKind::File,
                    Err(e) => {
                        debug!(path = %entry_path.display(), error = %e, "skipping dangling symlink");
                        continue;
                    }
                }
            } else {
                EntryKind::File
            };

            entries.push(DirEntry::new(entry.file_name(), kind));
        }

        Ok(entries)
    }
}
