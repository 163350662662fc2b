use serde::{Deserialize, Serialize};

use super::defaults;

/// Record validation and correction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrityConfig {
    /// Apply the corrector's output after each audit.
    pub auto_correct: bool,
}

impl Default for IntegrityConfig {
    fn default() -> Self {
        Self {
            auto_correct: defaults::DEFAULT_AUTO_CORRECT,
        }
    }
}
