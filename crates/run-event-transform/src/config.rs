//! Transform configuration.

use serde::Deserialize;
use thiserror::Error;

/// Errors raised when validating a [`TransformConfig`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("configuration value '{0}' must not be empty")]
    Empty(&'static str),
}

/// Configuration for one transform instance, fixed at startup.
///
/// One logical change stream can carry several tables; each configured
/// instance handles exactly one table and writes to exactly one topic.
/// Both values are required and have no defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransformConfig {
    /// Name of the topic to write transformed messages to
    pub topic: String,
    /// Name of the table to transform
    pub table: String,
}

impl TransformConfig {
    pub fn new(
        topic: impl Into<String>,
        table: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = TransformConfig {
            topic: topic.into(),
            table: table.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants a host-supplied configuration must hold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.topic.is_empty() {
            return Err(ConfigError::Empty("topic"));
        }
        if self.table.is_empty() {
            return Err(ConfigError::Empty("table"));
        }
        Ok(())
    }
}
