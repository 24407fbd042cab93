//! Configuration for the token service

use std::str::FromStr;

use jsonwebtoken::Algorithm;
use ju_shared::config::{JwtConfig, DEFAULT_JWT_SECRET};

use crate::domain::validity::{TimeUnit, Validity};
use crate::errors::TokenError;

use super::jwt::{DEFAULT_ALGORITHM, HMAC_ALGORITHMS};

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Lifetime of issued tokens
    pub validity: Validity,
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("validity", &self.validity)
            .finish()
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_JWT_SECRET.to_string(),
            algorithm: DEFAULT_ALGORITHM,
            validity: Validity::new(15, TimeUnit::Minutes),
        }
    }
}

impl TokenServiceConfig {
    /// Whether the algorithm can sign with a shared secret
    pub fn is_hmac(&self) -> bool {
        HMAC_ALGORITHMS.contains(&self.algorithm)
    }
}

impl TryFrom<&JwtConfig> for TokenServiceConfig {
    type Error = TokenError;

    fn try_from(config: &JwtConfig) -> Result<Self, Self::Error> {
        let name = config.algorithm.trim().to_uppercase();
        let algorithm = Algorithm::from_str(&name).map_err(|_| {
            TokenError::UnsupportedAlgorithm {
                name: config.algorithm.clone(),
            }
        })?;

        Ok(Self {
            secret: config.secret.clone(),
            algorithm,
            validity: Validity::new(config.token_validity, TimeUnit::Seconds),
        })
    }
}
