//! Configuration, loaded from TOML. Every section falls back to its defaults.

pub mod defaults;
pub mod estimation_config;
pub mod integrity_config;
pub mod observability_config;
pub mod optimization_config;

pub use estimation_config::EstimationConfig;
pub use integrity_config::IntegrityConfig;
pub use observability_config::ObservabilityConfig;
pub use optimization_config::{Objective, OptimizationConfig};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration for both engines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainwatchConfig {
    pub integrity: IntegrityConfig,
    pub optimization: OptimizationConfig,
    pub estimation: EstimationConfig,
    pub observability: ObservabilityConfig,
}

impl ChainwatchConfig {
    /// Parse and validate a TOML document. Missing sections and keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.optimization.validate()?;
        self.estimation.validate()?;
        Ok(())
    }
}
