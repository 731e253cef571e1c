//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `color` - Color rules and ANSI code parsing
//! - `utils` - Line layout shared by formatters
//! - `streaming` - Streaming formatter for console output

pub mod color;
mod config;
mod streaming;
mod utils;

pub use color::{ColorRules, FOLDER_KEY, parse_ansi_code};
pub use config::OutputConfig;
pub use streaming::StreamingFormatter;
