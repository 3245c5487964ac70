//! CLI configuration management.
//!
//! Handles loading of `randshow.toml` with environment variable override
//! support. A missing file is not an error: the defaults apply.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::engine::EngineKind;

/// Defaults for the `check` command.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct CheckConfig {
    /// Number of buckets
    pub range: u64,
    /// Expected draws per bucket
    pub per_bucket: u64,
    /// Accepted relative deviation per bucket
    pub tolerance: f64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            range: 2_000,
            per_bucket: 1_200,
            tolerance: 0.15,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RandshowConfig {
    /// Engine used when no `--engine` is given
    #[serde(default)]
    pub engine: EngineKind,

    /// Seed used when no `--seed` is given; entropy seeding when absent
    pub seed: Option<u64>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Uniformity check defaults
    #[serde(default)]
    pub check: CheckConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RandshowConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            seed: None,
            log_level: default_log_level(),
            check: CheckConfig::default(),
        }
    }
}

impl RandshowConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or return the defaults if the file
    /// does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, keyed by environment variable name
    fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();

        if let Some(engine) = lookup("RANDSHOW_ENGINE") {
            match EngineKind::from_name(engine.trim()) {
                Some(kind) => self.engine = kind,
                None => errors.push(format!("RANDSHOW_ENGINE '{}' is not a known engine", engine)),
            }
        }

        if let Some(seed) = lookup("RANDSHOW_SEED") {
            match seed.trim().parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => errors.push(format!("RANDSHOW_SEED '{}' is not a u64", seed)),
            }
        }

        if let Some(log_level) = lookup("RANDSHOW_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.check.range == 0 {
            errors.push("check.range must be greater than 0".to_string());
        }
        if self.check.per_bucket == 0 {
            errors.push("check.per_bucket must be greater than 0".to_string());
        }
        if !(self.check.tolerance > 0.0 && self.check.tolerance <= 1.0) {
            errors.push(format!(
                "check.tolerance {} must lie in (0, 1]",
                self.check.tolerance
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
