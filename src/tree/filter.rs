//! Entry filtering for tree walking

use glob::Pattern;
use tracing::warn;

/// Rules that exclude entries from the walk by name.
///
/// Substring rules come from the config file (`ignore = <text>`), where any
/// name containing the text is excluded. Command-line patterns containing
/// glob metacharacters are matched as globs against the whole name; the rest
/// are treated as substrings too.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    substrings: Vec<String>,
    globs: Vec<Pattern>,
}

impl IgnoreRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude any name containing `text`.
    pub fn add_substring(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.substrings.push(text);
        }
    }

    /// Add a command-line pattern: glob if it looks like one, substring otherwise.
    ///
    /// A pattern that fails to compile as a glob falls back to substring matching.
    pub fn add_pattern(&mut self, pattern: &str) {
        if !is_glob(pattern) {
            self.add_substring(pattern);
            return;
        }
        match Pattern::new(pattern) {
            Ok(p) => self.globs.push(p),
            Err(e) => {
                warn!(pattern, error = %e, "invalid glob pattern, matching as text");
                self.add_substring(pattern);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.substrings.is_empty() && self.globs.is_empty()
    }

    /// Check whether an entry name is excluded.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.substrings.iter().any(|s| name.contains(s.as_str()))
            || self.globs.iter().any(|p| p.matches(name))
    }
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Hidden entries start with a dot.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
