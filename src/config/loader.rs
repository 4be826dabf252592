//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{OrgError, OrgResult};

use super::types::Config;

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "orgcheck.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Project(PathBuf),
    User(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Project(p) | ConfigSource::User(p) => {
                Some(p)
            }
            ConfigSource::Defaults => None,
        }
    }
}

/// Effective configuration plus where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> OrgResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| OrgError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration: explicit path, then `./orgcheck.toml`, then the
/// user config dir, then defaults. Env overrides are applied on top.
pub fn load_or_default(explicit: Option<&Path>, working_dir: &Path) -> OrgResult<LoadedConfig> {
    let user_config = dirs::config_dir().map(|dir| dir.join("orgcheck").join("config.toml"));
    discover(explicit, working_dir, user_config.as_deref())
}

pub(crate) fn discover(
    explicit: Option<&Path>,
    working_dir: &Path,
    user_config: Option<&Path>,
) -> OrgResult<LoadedConfig> {
    let source = if let Some(path) = explicit {
        if !path.exists() {
            return Err(OrgError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        ConfigSource::Explicit(path.to_path_buf())
    } else {
        let project = working_dir.join(PROJECT_CONFIG_FILE);
        if project.exists() {
            ConfigSource::Project(project)
        } else {
            match user_config.filter(|p| p.exists()) {
                Some(user) => ConfigSource::User(user.to_path_buf()),
                None => ConfigSource::Defaults,
            }
        }
    };

    let (config, warnings) = match source.path() {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            load_with_warnings(path)?
        }
        None => (Config::default(), Vec::new()),
    };

    for warning in &warnings {
        warn!("{}", warning);
    }

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        source,
        warnings,
    })
}

/// Apply environment variable overrides (ORGCHECK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from any key lookup. Unparseable values are ignored.
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(ratio) = parse_var(&lookup, "ORGCHECK_MIN_SALARY_RATIO") {
        config.policy.min_salary_ratio = ratio;
    }

    if let Some(ratio) = parse_var(&lookup, "ORGCHECK_MAX_SALARY_RATIO") {
        config.policy.max_salary_ratio = ratio;
    }

    if let Some(levels) = parse_var(&lookup, "ORGCHECK_MAX_REPORTING_LEVELS") {
        config.policy.max_reporting_levels = levels;
    }

    config
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "policy",
        "min_salary_ratio",
        "max_salary_ratio",
        "max_reporting_levels",
        "input",
        "delimiter",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
