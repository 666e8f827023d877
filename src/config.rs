//! Configuration handling for happy-cli
//!
//! Configuration is read from the path given by `--config` / `HAPPY_CONFIG`,
//! falling back to `~/.config/happy-cli/config.toml` (platform dependent).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Defaults for the `check`, `trace` and `range` commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Print the digit-square-sum sequence for every check
    pub trace: bool,

    /// Report elapsed time for every check
    pub timing: bool,

    /// Widest span accepted by `happy range`
    pub range_limit: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            trace: false,
            timing: false,
            range_limit: 1_000_000,
        }
    }
}

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Output format used when `--format` is not given
    pub default_format: OutputFormat,

    pub check: CheckConfig,
}

impl Config {
    /// Returns the default config file location
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "happy", "happy-cli")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Picks the explicit path if given, else the default location
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit.map(Path::to_path_buf).or_else(Self::default_path)
    }

    /// Loads configuration
    ///
    /// An explicitly named file must exist. A missing file at the default
    /// location yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        Self::load_from(&path)
    }

    /// Loads and validates the file at `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Parses and validates TOML content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.check.range_limit == 0 {
            return Err(ConfigError::Invalid(
                "check.range_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Serializes to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Writes the configuration to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.default_format, OutputFormat::Text);
        assert!(!config.check.trace);
        assert!(!config.check.timing);
        assert_eq!(config.check.range_limit, 1_000_000);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
default_format = "json"

[check]
trace = true
timing = true
range_limit = 500
"#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.default_format, OutputFormat::Json);
        assert!(config.check.trace);
        assert!(config.check.timing);
        assert_eq!(config.check.range_limit, 500);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = Config::parse("[check]\ntiming = true\n").unwrap();

        assert_eq!(config.default_format, OutputFormat::Text);
        assert!(config.check.timing);
        assert_eq!(config.check.range_limit, 1_000_000);
    }

    #[test]
    fn rejects_zero_range_limit() {
        let err = Config::parse("[check]\nrange_limit = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = Config::parse("default_format = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = Config::parse("default_format = \"yaml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.check.range_limit = 42;
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }
}
