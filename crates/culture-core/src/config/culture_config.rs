//! Top-level configuration.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, ProfileConfig};
use crate::constants::MAX_SCORE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CultureConfig {
    pub profiles: ProfileConfig,
    pub observability: ObservabilityConfig,
}

impl CultureConfig {
    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse(toml_str, "<string>")
    }

    /// Load configuration from a TOML file and validate it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound {
                path: display.clone(),
            },
            _ => ConfigError::ReadError {
                path: display.clone(),
                message: e.to_string(),
            },
        })?;
        Self::parse(&content, &display)
    }

    fn parse(toml_str: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.profiles.max_profiles == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "profiles.max_profiles".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.profiles.default_score > MAX_SCORE {
            return Err(ConfigError::ValidationFailed {
                field: "profiles.default_score".to_string(),
                message: format!("must be between 0 and {MAX_SCORE}"),
            });
        }
        Ok(())
    }
}
