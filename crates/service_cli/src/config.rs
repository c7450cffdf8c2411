//! CLI configuration management.
//!
//! Loads defaults from a TOML file, applies environment variable overrides
//! and validates the result before any calculation runs.

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use strategy_core::calculator::CalculatorConfig;
use strategy_core::grid::{
    GridConfig, DEFAULT_GRID_POINTS, DEFAULT_HIGH_MULTIPLIER, DEFAULT_LOW_MULTIPLIER,
};
use strategy_core::metrics::{BreakEvenPolicy, COVERED_CALL_BREAK_EVEN};
use strategy_core::types::DEFAULT_CONTRACT_SIZE;

use crate::output::OutputFormat;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "strategy-returns.toml";

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid environment variable value
    #[error("Environment variable {name}: {message}")]
    Env {
        /// Variable name
        name: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// Validation errors
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Price grid section of the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridSection {
    /// Lower bound as a multiple of the current price
    pub low_multiplier: f64,
    /// Upper bound as a multiple of the current price
    pub high_multiplier: f64,
    /// Number of grid prices
    pub points: usize,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            low_multiplier: DEFAULT_LOW_MULTIPLIER,
            high_multiplier: DEFAULT_HIGH_MULTIPLIER,
            points: DEFAULT_GRID_POINTS,
        }
    }
}

impl From<GridSection> for GridConfig {
    fn from(section: GridSection) -> Self {
        GridConfig::new(section.low_multiplier, section.high_multiplier, section.points)
    }
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level (overridden by `RUST_LOG`)
    pub log_level: String,

    /// Default output format
    #[serde(deserialize_with = "deserialize_from_str")]
    pub output_format: OutputFormat,

    /// Shares per contract when not given on the command line
    pub contract_size: u32,

    /// Covered-call break-even formula
    #[serde(deserialize_with = "deserialize_from_str")]
    pub break_even: BreakEvenPolicy,

    /// Price grid bounds
    pub grid: GridSection,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            output_format: OutputFormat::Table,
            contract_size: DEFAULT_CONTRACT_SIZE,
            break_even: COVERED_CALL_BREAK_EVEN,
            grid: GridSection::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup("STRATEGY_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(format) = lookup("STRATEGY_OUTPUT_FORMAT") {
            self.output_format = parse_env("STRATEGY_OUTPUT_FORMAT", &format)?;
        }

        if let Some(policy) = lookup("STRATEGY_BREAK_EVEN") {
            self.break_even = parse_env("STRATEGY_BREAK_EVEN", &policy)?;
        }

        if let Some(points) = lookup("STRATEGY_GRID_POINTS") {
            self.grid.points = parse_env("STRATEGY_GRID_POINTS", &points)?;
        }

        if let Some(low) = lookup("STRATEGY_LOW_MULTIPLIER") {
            self.grid.low_multiplier = parse_env("STRATEGY_LOW_MULTIPLIER", &low)?;
        }

        if let Some(high) = lookup("STRATEGY_HIGH_MULTIPLIER") {
            self.grid.high_multiplier = parse_env("STRATEGY_HIGH_MULTIPLIER", &high)?;
        }

        Ok(self)
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

        if self.contract_size == 0 {
            errors.push("contract_size must be greater than 0".to_string());
        }

        if let Err(e) = GridConfig::from(self.grid).validate() {
            errors.push(format!("grid: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }

    /// Calculator settings derived from this configuration
    pub fn calculator_config(&self) -> CalculatorConfig {
        CalculatorConfig {
            grid: self.grid.into(),
            covered_call_break_even: self.break_even,
        }
    }
}

fn parse_env<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Env {
        name,
        message: format!("cannot parse '{}': {}", value, e),
    })
}
