use std::io;

use thiserror::Error;

/// Errors reported by the conversion and formatting functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizeError {
    #[error("Invalid argument: {name} must be a non-negative number (got {value})")]
    InvalidArgument { name: &'static str, value: f64 },

    #[error("Unsupported unit '{0}'")]
    UnsupportedUnit(String),

    #[error("Unsupported locale '{0}'")]
    UnsupportedLocale(String),
}

impl SizeError {
    pub fn invalid_argument(name: &'static str, value: f64) -> Self {
        SizeError::InvalidArgument { name, value }
    }

    pub fn unsupported_unit<S: Into<String>>(unit: S) -> Self {
        SizeError::UnsupportedUnit(unit.into())
    }
}

/// Application-wide error type for the sizeconv CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Size(#[from] SizeError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to launch editor: {0}")]
    Editor(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to write configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AppError::Config(msg.into())
    }
}
