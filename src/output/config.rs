//! Output configuration types

use super::color::ColorRules;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Colors applied when `use_color` is set.
    pub colors: ColorRules,
    /// Print the `Tree structure for:` title before the tree.
    pub show_title: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: false,
            colors: ColorRules::default(),
            show_title: true,
        }
    }
}
