//! Token error types.
//!
//! Failures reported by the signing engine pass through untouched inside
//! [`TokenError::Jwt`]; the remaining variants cover checks made before the
//! engine is called.

use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;


/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Secret key must not be empty")]
    EmptySecret,

    #[error("Token validity overflows the representable time range")]
    ValidityOverflow,

    #[error("Missing claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Invalid claim type: {claim}")]
    InvalidClaim { claim: String },

    #[error("Missing or malformed bearer token")]
    MissingBearerToken,

    #[error("Unsupported signing algorithm: {name}")]
    UnsupportedAlgorithm { name: String },

    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl TokenError {
    /// Engine error kind, when the engine produced the error
    pub fn jwt_kind(&self) -> Option<&ErrorKind> {
        match self {
            TokenError::Jwt(e) => Some(e.kind()),
            _ => None,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self.jwt_kind(), Some(ErrorKind::ExpiredSignature))
    }

    pub fn is_invalid_signature(&self) -> bool {
        matches!(self.jwt_kind(), Some(ErrorKind::InvalidSignature))
    }
}

impl From<ErrorKind> for TokenError {
    fn from(kind: ErrorKind) -> Self {
        TokenError::Jwt(kind.into())
    }
}

pub type TokenResult<T> = Result<T, TokenError>;
