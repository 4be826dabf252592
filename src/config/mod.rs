//! Configuration module for orgcheck
//!
//! Configuration hierarchy (highest priority first):
//! 1. CLI flags
//! 2. Environment variables (ORGCHECK_*)
//! 3. Explicit `--config` file, else `./orgcheck.toml`
//! 4. User config (`<config dir>/orgcheck/config.toml`)
//! 5. Built-in defaults

mod loader;
mod types;

pub use loader::{
    load_or_default, with_overrides_from, ConfigSource, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, InputConfig, OutputConfig};
