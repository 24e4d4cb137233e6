//! Dashboard configuration.
//!
//! # Responsibility
//! - Describe tunables for latency simulation, panel sizes and thresholds.
//! - Load them from a JSON file, filling omitted fields with defaults.
//!
//! # Invariants
//! - A loaded config has passed `validate()`.
//! - Unknown keys are rejected so typos do not silently fall back.

use crate::logging::default_log_level;
use crate::model::habit::DEFAULT_DAILY_GOAL_TARGET;
use crate::model::idea::DEFAULT_VALIDATED_THRESHOLD;
use crate::repo::latency::LatencyProfile;
use crate::repo::learning_repo::RECENT_BOOKS_DEFAULT_LIMIT;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Runtime tunables for one dashboard instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct DashboardConfig {
    /// Simulated repository delays.
    pub latency: LatencyProfile,
    /// Books listed in the learning panel.
    pub recent_books_limit: usize,
    /// Habits to complete today for the daily goal.
    pub daily_goal_target: u32,
    /// Rounded checklist percentage counted as "validated".
    pub validated_threshold: u32,
    /// `trace|debug|info|warn|error`.
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            latency: LatencyProfile::default(),
            recent_books_limit: RECENT_BOOKS_DEFAULT_LIMIT,
            daily_goal_target: DEFAULT_DAILY_GOAL_TARGET,
            validated_threshold: DEFAULT_VALIDATED_THRESHOLD,
            log_level: default_log_level().to_string(),
        }
    }
}

impl DashboardConfig {
    /// Defaults with every simulated delay disabled.
    pub fn instant() -> Self {
        Self {
            latency: LatencyProfile::instant(),
            ..Self::default()
        }
    }

    /// Reads and validates a JSON config file.
    ///
    /// # Errors
    /// - `Io` when the file cannot be read.
    /// - `Parse` on malformed JSON or unknown keys.
    /// - `Invalid` when a value is out of range.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recent_books_limit == 0 {
            return Err(ConfigError::Invalid(
                "recentBooksLimit must be at least 1".to_string(),
            ));
        }
        if self.validated_threshold > 100 {
            return Err(ConfigError::Invalid(format!(
                "validatedThreshold must be between 0 and 100, got {}",
                self.validated_threshold
            )));
        }
        if !matches!(
            self.log_level.trim().to_ascii_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "warning" | "error"
        ) {
            return Err(ConfigError::Invalid(format!(
                "unsupported log level `{}`",
                self.log_level
            )));
        }
        Ok(())
    }
}

/// Errors from loading a dashboard config.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}
