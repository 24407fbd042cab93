//! JWT signing configuration

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Secret used when nothing else is configured. Only suitable for local work.
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing and verifying tokens
    pub secret: String,

    /// Token validity in seconds
    #[serde(default = "default_token_validity")]
    pub token_validity: i64,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            token_validity: default_token_validity(),
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token validity in minutes
    pub fn with_validity_minutes(mut self, minutes: i64) -> Self {
        self.token_validity = minutes.saturating_mul(60);
        self
    }

    /// Set the signing algorithm name (e.g. "HS512"), case-insensitively
    pub fn with_algorithm(mut self, algorithm: impl AsRef<str>) -> Self {
        self.algorithm = normalize_algorithm(algorithm.as_ref());
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }

    /// Load from `JWT_SECRET`, `JWT_ALGORITHM` and `JWT_TOKEN_VALIDITY`.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`JwtConfig::from_env`] but reads through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let secret = lookup("JWT_SECRET").unwrap_or(defaults.secret);
        let algorithm = lookup("JWT_ALGORITHM")
            .map(|alg| normalize_algorithm(&alg))
            .filter(|alg| !alg.is_empty())
            .unwrap_or(defaults.algorithm);
        let token_validity = lookup("JWT_TOKEN_VALIDITY")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.token_validity);

        Self {
            secret,
            token_validity,
            algorithm,
        }
    }

    /// Reject settings no token could be issued with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::MissingValue {
                key: String::from("JWT_SECRET"),
            });
        }
        if self.token_validity < 0 {
            return Err(ConfigError::InvalidValue {
                key: String::from("JWT_TOKEN_VALIDITY"),
                value: self.token_validity.to_string(),
            });
        }
        Ok(())
    }
}

fn normalize_algorithm(name: &str) -> String {
    name.trim().to_uppercase()
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn default_token_validity() -> i64 {
    900 // 15 minutes
}
