//! Shared configuration and logging for JwtUtil
//!
//! This crate provides functionality used across the workspace:
//! - Configuration types (JWT, environment, logging)
//! - Configuration error types
//! - Tracing subscriber initialization

pub mod config;
pub mod errors;
pub mod logging;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, JwtConfig, LogFormat, LoggingConfig};
pub use errors::ConfigError;
pub use logging::init_logging;
