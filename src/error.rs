//! Error types for the fallible edges of the crate.
//!
//! Simulation itself is total; only loading a configuration table can fail.

use thiserror::Error;

/// Failure to load or validate a [`PhysicsConfig`](crate::config::PhysicsConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse physics config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid physics config field `{field}`: {reason}")]
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
