//! Configuration file parsing for `pmerge.toml`.
//!
//! Searches current directory then ancestors, falling back to
//! `~/.config/pmerge/pmerge.toml` if no project-level file is found.

use pmerge_core::MAX_ELEMENT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::timing::TimeUnit;

pub const CONFIG_FILE: &str = "pmerge.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid toml in '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("input.max_value must be between 1 and {max}, got {0}", max = MAX_ELEMENT)]
    MaxValueOutOfRange(u64),
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct PmergeConfig {
    #[serde(default)]
    pub input: InputSection,
    #[serde(default)]
    pub display: DisplaySection,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct InputSection {
    /// Largest value accepted on the command line or generated by `--random`.
    #[serde(default = "default_max_value")]
    pub max_value: u64,
}

impl Default for InputSection {
    fn default() -> Self {
        InputSection {
            max_value: default_max_value(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DisplaySection {
    /// Maximum values shown per Before/After line; everything when absent.
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default)]
    pub unit: TimeUnit,
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for DisplaySection {
    fn default() -> Self {
        DisplaySection {
            limit: None,
            precision: default_precision(),
            unit: TimeUnit::default(),
            color: default_color(),
        }
    }
}

fn default_max_value() -> u64 {
    u64::from(MAX_ELEMENT)
}

fn default_precision() -> usize {
    6
}

fn default_color() -> bool {
    true
}

impl PmergeConfig {
    /// Find the nearest `pmerge.toml` and parse it.
    ///
    /// `Ok(None)` means no file exists anywhere on the search path. A file
    /// that exists but does not parse is an error.
    pub fn discover() -> Result<Option<(PathBuf, Self)>, ConfigError> {
        match Self::find() {
            Some(path) => {
                let cfg = Self::load_from(&path)?;
                Ok(Some((path, cfg)))
            }
            None => Ok(None),
        }
    }

    /// Load config from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a TOML string directly (useful for testing).
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<string>"),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// The accepted maximum as an element.
    pub fn max_value(&self) -> pmerge_core::Element {
        // validate() keeps this within MAX_ELEMENT
        self.input.max_value.min(u64::from(MAX_ELEMENT)) as pmerge_core::Element
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let max = self.input.max_value;
        if max == 0 || max > u64::from(MAX_ELEMENT) {
            return Err(ConfigError::MaxValueOutOfRange(max));
        }
        Ok(())
    }

    fn find() -> Option<PathBuf> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !dir.pop() {
                break;
            }
        }
        let global = home_dir()?.join(".config").join("pmerge").join(CONFIG_FILE);
        global.is_file().then_some(global)
    }

    /// Generate a default `pmerge.toml` template.
    pub fn default_template() -> &'static str {
        r#"# PmergeMe configuration

[input]
# Largest accepted value (at most 2147483647)
max_value = 2147483647

[display]
# Show at most this many values on the Before/After lines
# limit = 20
precision = 6
# s | ms | us
unit = "s"
color = true
"#
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
