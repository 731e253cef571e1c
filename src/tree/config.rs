//! Configuration types for the tree walker

use super::filter::IgnoreRules;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Deepest directory level to expand (`None` for unlimited). The root is level 0.
    pub max_depth: Option<usize>,
    pub dirs_only: bool,
    /// Include entries whose name starts with a dot.
    pub show_hidden: bool,
    pub ignore: IgnoreRules,
}

impl WalkerConfig {
    /// Whether a directory at `depth` lies beyond the depth limit.
    pub fn exceeds_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }

    pub fn include_files(&self) -> bool {
        !self.dirs_only
    }
}
