//! Configuration errors
//!
//! The simulation itself has no failure modes: blocked spawns, coincident
//! points and last-segment damage are ordinary state transitions. Only
//! loading and validating a [`crate::GameConfig`] can fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
