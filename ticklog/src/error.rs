//! Error types for loading configuration.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{field} must be greater than zero")]
    InvalidInterval { field: &'static str },
}

/// A line typed at the interactive prompt that could not be understood.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}` (type `help` for a list)")]
    Unknown(String),

    #[error("unknown tab `{0}` (expected clock, stopwatch, settings, or log)")]
    UnknownTab(String),

    #[error("`tab` needs a tab name")]
    MissingTab,
}
