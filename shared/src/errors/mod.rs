//! Shared error types

use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing configuration value: {key}")]
    MissingValue { key: String },

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Insecure default in use for {key}")]
    InsecureDefault { key: String },

    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },
}
