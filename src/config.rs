//! Configuration file loading
//!
//! The config file is a list of `key = value` lines:
//!
//! ```text
//! # comments and blank lines are skipped
//! color = .c:31
//! color = folder:1;34
//! ignore = node_modules
//! ```
//!
//! It is read once at startup into an immutable [`Config`]. A missing file
//! yields an empty configuration; a malformed line is dropped with a warning
//! and the rest of the file still loads.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::output::{ColorRules, parse_ansi_code};

/// Name of the per-user config file inside the platform config directory.
const CONFIG_DIR_NAME: &str = "dmitree";
const CONFIG_FILE_NAME: &str = "config";
/// Fallback config file in the home directory.
const RC_FILE_NAME: &str = ".dmitreerc";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: expected `key = value`")]
    MissingValue { line: usize },

    #[error("line {line}: unknown option '{key}'")]
    UnknownKey { line: usize, key: String },

    #[error("line {line}: color rule '{value}' is missing the ':' separator")]
    MissingSeparator { line: usize, value: String },

    #[error("line {line}: color rule has no extension or 'folder' key")]
    MissingColorKey { line: usize },

    #[error("line {line}: invalid color code '{code}'")]
    InvalidColorCode { line: usize, code: String },
}

/// Settings read from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub colors: ColorRules,
    /// Substrings that exclude any entry whose name contains them.
    pub ignore: Vec<String>,
}

impl Config {
    /// Parse config text, keeping every valid line.
    ///
    /// Returns the configuration together with one error per rejected line.
    pub fn parse(text: &str) -> (Config, Vec<ConfigError>) {
        let mut config = Config::default();
        let mut errors = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if let Err(e) = config.apply_line(line, trimmed) {
                errors.push(e);
            }
        }

        (config, errors)
    }

    fn apply_line(&mut self, line: usize, text: &str) -> Result<(), ConfigError> {
        let (key, value) = text
            .split_once('=')
            .map(|(k, v)| (k.trim(), v.trim()))
            .filter(|(_, v)| !v.is_empty())
            .ok_or(ConfigError::MissingValue { line })?;

        match key {
            "color" => {
                let (target, code) =
                    value
                        .split_once(':')
                        .ok_or_else(|| ConfigError::MissingSeparator {
                            line,
                            value: value.to_string(),
                        })?;
                let target = target.trim();
                if target.is_empty() || target == "." {
                    return Err(ConfigError::MissingColorKey { line });
                }
                let spec = parse_ansi_code(code).ok_or_else(|| ConfigError::InvalidColorCode {
                    line,
                    code: code.trim().to_string(),
                })?;
                self.colors.insert(target, spec);
            }
            "ignore" => self.ignore.push(value.to_string()),
            _ => {
                return Err(ConfigError::UnknownKey {
                    line,
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Load a config file. A file that does not exist gives an empty config.
    ///
    /// Malformed lines are logged and skipped.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file");
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let (config, errors) = Config::parse(&text);
        for e in &errors {
            warn!(path = %path.display(), "ignoring config line: {}", e);
        }
        debug!(
            path = %path.display(),
            color_rules = config.colors.len(),
            ignore_rules = config.ignore.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Load the explicit config file if given, otherwise the first existing
    /// file from [`default_paths`]. Read failures fall back to an empty config.
    pub fn discover(explicit: Option<&Path>) -> Config {
        let path = match explicit {
            Some(p) => {
                if !p.exists() {
                    warn!(path = %p.display(), "config file not found");
                }
                Some(p.to_path_buf())
            }
            None => default_paths().into_iter().find(|p| p.is_file()),
        };

        let Some(path) = path else {
            return Config::default();
        };

        Config::load(&path).unwrap_or_else(|e| {
            warn!("{}", e);
            Config::default()
        })
    }
}

/// Config file locations, in search order.
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(RC_FILE_NAME));
    }
    paths
}
