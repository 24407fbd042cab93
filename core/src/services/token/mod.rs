//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - Signing claims into compact HS256/HS384/HS512 tokens
//! - Verifying tokens and reading claims back
//! - Extracting bearer tokens from `Authorization` header values
//! - A config-bound facade over the free functions

mod builder;
mod config;
mod header;
mod jwt;
mod service;

#[cfg(test)]
mod tests;

pub use builder::TokenBuilder;
pub use config::TokenServiceConfig;
pub use header::{extract_token, AUTHORIZATION_HEADER, TOKEN_PREFIX};
pub use jwt::{
    create_token, decode_claims, get_claim, get_subject, validate_token, DEFAULT_ALGORITHM,
    HMAC_ALGORITHMS,
};
pub use service::TokenService;
