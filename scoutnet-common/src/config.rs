//! Configuration types for Scoutnet

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration
///
/// The access policy itself is not configurable; these settings cover the
/// ambient services around it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutnetConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Message thread configuration
    pub messaging: MessagingConfig,
}

impl ScoutnetConfig {
    /// Parse configuration from a TOML document
    ///
    /// # Errors
    /// Returns `Error::ConfigError` if the document is not valid TOML or has
    /// values of the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults when it is absent
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.messaging.message_buffer_size == 0 {
            return Err(Error::ConfigError(
                "messaging.message_buffer_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Message thread configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagingConfig {
    /// Messages retained per thread; the oldest are evicted first
    pub message_buffer_size: usize,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            message_buffer_size: 1000,
        }
    }
}
