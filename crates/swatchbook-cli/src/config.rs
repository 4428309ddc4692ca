//! Optional YAML configuration.
//!
//! ```yaml
//! tokens: tokens.json
//! search_limit: 50
//! output: auto
//! log_level: warn
//! ```
//!
//! Read from `--config <path>`, else from `./swatchbook.yaml` when present.
//! Command-line flags override every value.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::output::OutputMode;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "swatchbook.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Token file used when a command is given none. Relative paths are
    /// relative to the config file.
    pub tokens: Option<PathBuf>,
    pub search_limit: Option<usize>,
    pub output: Option<OutputMode>,
    /// A `tracing` filter directive such as `warn` or `swatchbook=debug`.
    pub log_level: Option<String>,
}

impl Config {
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source).context("invalid swatchbook config")
    }

    /// Reads a config file. A relative `tokens` path is rebased onto the
    /// file's directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config = Self::from_yaml_str(&source)
            .with_context(|| format!("in config {}", path.display()))?;

        let rebased = match (&config.tokens, path.parent()) {
            (Some(tokens), Some(dir)) if tokens.is_relative() => Some(dir.join(tokens)),
            _ => None,
        };
        if rebased.is_some() {
            config.tokens = rebased;
        }
        Ok(config)
    }

    /// Loads the explicit config, or the default file in `cwd` if it
    /// exists, or nothing.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => {
                let fallback = cwd.join(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_path(&fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
