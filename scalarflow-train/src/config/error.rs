use thiserror::Error;

/// Errors produced when loading or validating a [`TrainConfig`](super::TrainConfig).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Values are out of range or inconsistent.
    #[error("config validation: {0}")]
    Validation(String),

    /// A variable is set but could not be read (e.g. not valid Unicode).
    #[error("env var {key}: {message}")]
    EnvVar { key: String, message: String },

    /// A variable is set but does not parse into the expected type.
    #[error("env var {key}={value:?}: {message}")]
    Parse {
        key: String,
        value: String,
        message: String,
    },
}

impl ConfigError {
    /// Short message without the key, for logging.
    pub fn message(&self) -> &str {
        match self {
            ConfigError::Validation(m) => m,
            ConfigError::EnvVar { message, .. } => message,
            ConfigError::Parse { message, .. } => message,
        }
    }
}
