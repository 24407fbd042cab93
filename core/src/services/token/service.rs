//! Config-bound token service

use serde_json::Value;

use ju_shared::config::{JwtConfig, DEFAULT_JWT_SECRET};

use crate::domain::claims::{ClaimMap, Claims};
use crate::errors::{TokenError, TokenResult};

use super::config::TokenServiceConfig;
use super::header::extract_token;
use super::jwt;

/// Issues and verifies tokens with one configured secret, algorithm and
/// validity. Immutable after construction, so it can be shared freely.
#[derive(Debug, Clone)]
pub struct TokenService {
    config: TokenServiceConfig,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Returns
    ///
    /// * `Ok(TokenService)` - Service ready to issue tokens
    /// * `Err(TokenError)` - Empty secret or a non-HMAC algorithm
    pub fn new(config: TokenServiceConfig) -> TokenResult<Self> {
        if config.secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }
        if !config.is_hmac() {
            return Err(TokenError::UnsupportedAlgorithm {
                name: format!("{:?}", config.algorithm),
            });
        }
        if config.secret == DEFAULT_JWT_SECRET {
            tracing::warn!("Token service is using the development default secret");
        }

        tracing::debug!(
            algorithm = ?config.algorithm,
            validity_ms = config.validity.as_millis(),
            "Token service initialized"
        );
        Ok(Self { config })
    }

    /// Creates a token service from shared JWT configuration
    pub fn from_jwt_config(config: &JwtConfig) -> TokenResult<Self> {
        Self::new(TokenServiceConfig::try_from(config)?)
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Issues a token carrying only the registered claims
    pub fn issue(&self, subject: &str) -> TokenResult<String> {
        self.issue_with_claims(subject, &ClaimMap::new())
    }

    /// Issues a token carrying `claims` in addition to the registered claims
    pub fn issue_with_claims(&self, subject: &str, claims: &ClaimMap) -> TokenResult<String> {
        jwt::create_token(
            subject,
            claims,
            self.config.validity,
            &self.config.secret,
            self.config.algorithm,
        )
    }

    /// See [`jwt::validate_token`]
    pub fn validate(&self, token: &str) -> bool {
        jwt::validate_token(token, &self.config.secret)
    }

    pub fn claims(&self, token: &str) -> TokenResult<Claims> {
        jwt::decode_claims(token, &self.config.secret)
    }

    pub fn subject(&self, token: &str) -> TokenResult<String> {
        jwt::get_subject(token, &self.config.secret)
    }

    pub fn claim(&self, token: &str, key: &str) -> TokenResult<Option<Value>> {
        jwt::get_claim(token, &self.config.secret, key)
    }

    /// Verifies the bearer token in an `Authorization` header value
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Claims of a valid token
    /// * `Err(TokenError::MissingBearerToken)` - No header, or no `Bearer ` prefix
    /// * `Err(TokenError)` - The token itself failed verification
    pub fn authorize(&self, authorization_header: Option<&str>) -> TokenResult<Claims> {
        let token = extract_token(authorization_header)
            .filter(|token| !token.is_empty())
            .ok_or(TokenError::MissingBearerToken)?;
        self.claims(token)
    }
}
