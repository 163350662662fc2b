use super::error_code::{self, ErrorCode};

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {message}")]
    ParseError { message: String },

    #[error("invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
