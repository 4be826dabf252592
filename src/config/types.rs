//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::policies::AnalysisPolicy;
use crate::error::{OrgError, OrgResult};

use super::loader::{self, ConfigWarning};

/// Input configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Single ASCII character separating CSV fields
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

fn default_delimiter() -> String {
    ",".to_string()
}

impl InputConfig {
    /// The delimiter as a byte, if it is exactly one ASCII character
    pub fn delimiter_byte(&self) -> Option<u8> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Some(*b),
            _ => None,
        }
    }
}

/// Color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub policy: AnalysisPolicy,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> OrgResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> OrgResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (ORGCHECK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self, file: &Path) -> OrgResult<()> {
        let invalid = |message: String| OrgError::Config {
            file: file.to_path_buf(),
            message,
        };
        self.policy.validate().map_err(invalid)?;
        if self.input.delimiter_byte().is_none() {
            return Err(invalid(format!(
                "input.delimiter must be a single ASCII character, got {:?}",
                self.input.delimiter
            )));
        }
        Ok(())
    }
}
