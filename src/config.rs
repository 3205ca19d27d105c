//! Server configuration loaded from a TOML file.

use anyhow::{Context, Result, bail};
use chrono::TimeDelta;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::session::DEFAULT_MAX_AGE_DAYS;

const DEFAULT_SESSION_NAME: &str = "session-todos";
const DEFAULT_LOG_FILTER: &str = "info";

/// Top-level configuration.
///
/// ```toml
/// [session]
/// name = "my-lists"
/// max_age_days = 7
///
/// [logging]
/// filter = "session_todos=debug"
/// ```
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.session.name.trim().is_empty() {
            bail!("session.name must not be empty");
        }
        if self.session.max_age_days < 1 {
            bail!(
                "session.max_age_days must be at least 1, got {}",
                self.session.max_age_days
            );
        }
        if TimeDelta::try_days(self.session.max_age_days).is_none() {
            bail!(
                "session.max_age_days is out of range, got {}",
                self.session.max_age_days
            );
        }
        Ok(())
    }
}

/// Session block.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    /// Name of the session this server works on
    pub name: String,
    /// Days a session may stay idle before its lists are dropped
    pub max_age_days: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SESSION_NAME.to_string(),
            max_age_days: DEFAULT_MAX_AGE_DAYS,
        }
    }
}

impl SessionConfig {
    /// Idle lifetime as a duration, saturating at `TimeDelta::MAX` for
    /// values [`Config::parse`] would reject
    pub fn max_age(&self) -> TimeDelta {
        TimeDelta::try_days(self.max_age_days).unwrap_or(TimeDelta::MAX)
    }
}

/// Logging block.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
