//! Default-argument front end for [`create_token`].

use jsonwebtoken::Algorithm;
use serde_json::Value;

use crate::domain::claims::ClaimMap;
use crate::domain::validity::Validity;
use crate::errors::TokenResult;

use super::jwt::{create_token, DEFAULT_ALGORITHM};

/// Collects token parameters, defaulting claims to empty and the algorithm
/// to HS256.
///
/// ```
/// use ju_core::{TimeUnit, TokenBuilder};
///
/// let token = TokenBuilder::new("alice", (15, TimeUnit::Minutes))
///     .claim("role", "admin")
///     .sign("s3cret")
///     .unwrap();
/// assert!(ju_core::validate_token(&token, "s3cret"));
/// ```
#[derive(Debug, Clone)]
pub struct TokenBuilder {
    subject: String,
    claims: ClaimMap,
    validity: Validity,
    algorithm: Algorithm,
}

impl TokenBuilder {
    pub fn new(subject: impl Into<String>, validity: impl Into<Validity>) -> Self {
        Self {
            subject: subject.into(),
            claims: ClaimMap::new(),
            validity: validity.into(),
            algorithm: DEFAULT_ALGORITHM,
        }
    }

    /// Adds every entry of `claims`, replacing earlier values with the same key
    pub fn claims(mut self, claims: ClaimMap) -> Self {
        self.claims.extend(claims);
        self
    }

    pub fn claim(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.claims.insert(key.into(), value.into());
        self
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn sign(&self, secret_key: &str) -> TokenResult<String> {
        create_token(
            &self.subject,
            &self.claims,
            self.validity,
            secret_key,
            self.algorithm,
        )
    }
}
