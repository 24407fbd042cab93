//! Configuration module
//!
//! - `auth` - JWT signing configuration
//! - `environment` - Environment detection and logging configuration

pub mod auth;
pub mod environment;

use serde::{Deserialize, Serialize};

pub use auth::{JwtConfig, DEFAULT_JWT_SECRET};
pub use environment::{Environment, LogFormat, LoggingConfig};

use crate::errors::ConfigError;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Build configuration for the given environment with default values
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            jwt: JwtConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration from environment
    ///
    /// Reads the environment-specific `.env` file (then a plain `.env`) if
    /// present before looking at process variables, and validates the result.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        dotenvy::from_filename(environment.env_file()).ok();
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok());
        config.validate()?;

        tracing::debug!(
            environment = %config.environment,
            algorithm = %config.jwt.algorithm,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(&lookup);
        Self {
            environment,
            jwt: JwtConfig::from_lookup(&lookup),
            logging: LoggingConfig::for_environment(environment)
                .with_level_override(lookup("LOG_LEVEL")),
        }
    }

    /// Validate all sub-configurations
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jwt.validate()?;
        if self.environment.is_production() && self.jwt.is_using_default_secret() {
            return Err(ConfigError::InsecureDefault {
                key: String::from("JWT_SECRET"),
            });
        }
        Ok(())
    }
}
