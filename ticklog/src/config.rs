//! Application configuration.
//!
//! Settings come from an optional TOML file. Every key has a default, so a
//! missing file or a partial file is fine. Unknown keys are rejected. The
//! stopwatch period is not configurable: one tick is one second.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::Tab;
use crate::engine::StopwatchOptions;
use crate::error::ConfigError;
use crate::models::DEFAULT_SESSION_LABEL;

/// Directory under the platform config dir holding `config.toml`.
const CONFIG_DIR: &str = "ticklog";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Wall-clock refresh period in milliseconds.
    pub clock_interval_ms: u64,
    /// Description given to logged sessions.
    pub session_label: String,
    /// Tab shown when the app opens.
    pub start_tab: Tab,
    /// strftime pattern for the clock tab.
    pub clock_format: String,
    /// strftime pattern for session timestamps in the log tab.
    pub timestamp_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clock_interval_ms: 1000,
            session_label: DEFAULT_SESSION_LABEL.to_string(),
            start_tab: Tab::Stopwatch,
            clock_format: "%H:%M:%S".to_string(),
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// An explicit path must exist. A missing file at the default location
    /// yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => match default_path() {
                Some(path) if path.is_file() => Self::load_from(&path),
                _ => {
                    debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load and validate a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clock_interval_ms == 0 {
            return Err(ConfigError::InvalidInterval {
                field: "clock_interval_ms",
            });
        }
        Ok(())
    }

    pub const fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }

    /// Stopwatch settings derived from this config.
    pub fn stopwatch_options(&self) -> StopwatchOptions {
        StopwatchOptions::new().session_label(self.session_label.clone())
    }
}

/// `<config_dir>/ticklog/config.toml`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
