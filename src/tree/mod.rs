//! Directory tree walking logic
//!
//! The walker lists each directory through a [`FileSystem`], groups numbered
//! files by shape, and streams [`TreeLine`]s to a [`TreeSink`]. It keeps
//! O(depth) state: nothing survives once a directory's lines are emitted.

mod config;
mod filter;
mod fs;
mod group;
mod sink;
mod walker;

pub use config::WalkerConfig;
pub use filter::{IgnoreRules, is_hidden};
pub use fs::{DirEntry, EntryKind, FileSystem, OsFileSystem};
pub use group::{Group, GroupMap};
pub use sink::{TreeLine, TreeSink, WalkSummary};
pub use walker::TreeWalker;
