//! Configuration file for the state monitor.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{MonitorError, Result};
use crate::filter::NotifyFilter;
use crate::state::StateComparison;

/// Default config file name, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Poll interval used when `app.duration` is not set.
pub const DEFAULT_DURATION_SECS: u64 = 5;

/// Top-level configuration, as read from YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Slack webhook settings.
    pub slack: SlackConfig,

    /// WildFly deployment settings.
    pub wildfly: WildflyConfig,

    /// Monitor settings.
    pub app: AppConfig,
}

/// Slack webhook settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackConfig {
    /// Incoming webhook URL.
    pub api_url: String,

    /// Channel to post to.
    pub channel: String,
}

/// WildFly deployment settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WildflyConfig {
    /// Path of the deployed archive. Markers are read from its directory.
    pub war_path: PathBuf,
}

/// Monitor settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log file, appended to. Logs go to stdout when unset.
    pub log_path: Option<PathBuf>,

    /// Poll interval in seconds.
    pub duration: u64,

    /// Markers to notify about (extension tokens or names). Empty = all.
    pub notify_marker: Vec<String>,

    /// How consecutive samples are compared (`unordered` or `ordered`).
    pub comparison: StateComparison,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            duration: DEFAULT_DURATION_SECS,
            notify_marker: Vec::new(),
            comparison: StateComparison::default(),
        }
    }
}

impl Config {
    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| MonitorError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&contents).map_err(|source| MonitorError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        Ok(config)
    }

    /// Parse YAML without validating it.
    pub fn parse(contents: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(contents)
    }

    /// Check that required settings are present.
    pub fn validate(&self) -> Result<()> {
        if self.slack.api_url.trim().is_empty() {
            return Err(MonitorError::InvalidConfig(
                "require config.slack.api_url".to_string(),
            ));
        }
        if self.slack.channel.trim().is_empty() {
            return Err(MonitorError::InvalidConfig(
                "require config.slack.channel".to_string(),
            ));
        }
        if self.wildfly.war_path.as_os_str().is_empty() {
            return Err(MonitorError::InvalidConfig(
                "require config.wildfly.war_path".to_string(),
            ));
        }
        if self.app.duration == 0 {
            return Err(MonitorError::InvalidConfig(
                "config.app.duration must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }

    /// Directory the marker files are written to.
    pub fn marker_dir(&self) -> PathBuf {
        match self.wildfly.war_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.app.duration)
    }

    /// Build the notify filter, rejecting unknown markers.
    pub fn notify_filter(&self) -> Result<NotifyFilter> {
        NotifyFilter::from_entries(&self.app.notify_marker)
    }

    pub fn comparison(&self) -> StateComparison {
        self.app.comparison
    }
}
