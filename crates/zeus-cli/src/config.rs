//! Configuration for the `zeus` binary.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with ZEUS_ prefix)
//! 3. .env files
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use zeus_service::ServiceConfig;

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Simulation service settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Console,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "console" => Ok(LogFormat::Console),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("Unknown log format '{other}' (expected console or json)"),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log filter: "trace", "debug", "info", "warn", "error" or a full
    /// `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "console" or "json"
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Return the default config file location (~/.zeus/config.yaml).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".zeus").join("config.yaml"))
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml_ng::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Load .env file if it exists
    /// 2. Load from the given file, or ~/.zeus/config.yaml if present
    /// 3. Apply environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(path)?,
                None => Config::default(),
            },
        };

        let config = config.merge_vars(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields with `ZEUS_*` variables returned by `lookup`.
    ///
    /// Variables that are absent leave the corresponding fields unchanged;
    /// variables that are present but malformed are an error.
    pub fn merge_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(v) = lookup("ZEUS_DEFAULT_QUBITS") {
            self.service.default_qubits = parse_var("ZEUS_DEFAULT_QUBITS", &v)?;
        }
        if let Some(v) = lookup("ZEUS_MAX_QUBITS") {
            self.service.max_qubits = parse_var("ZEUS_MAX_QUBITS", &v)?;
        }
        if let Some(v) = lookup("ZEUS_DECIMALS") {
            self.service.decimals = parse_var("ZEUS_DECIMALS", &v)?;
        }
        if let Some(v) = lookup("ZEUS_NORM_TOLERANCE") {
            self.service.norm_tolerance = parse_var("ZEUS_NORM_TOLERANCE", &v)?;
        }

        if let Some(v) = lookup("ZEUS_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = lookup("ZEUS_LOG_FORMAT") {
            self.logging.format = v.parse()?;
        }

        Ok(self)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        self.service.validate()?;
        if self.logging.level.trim().is_empty() {
            anyhow::bail!("logging.level must not be empty");
        }
        Ok(())
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("Invalid value for {key}: '{value}'"))
}
