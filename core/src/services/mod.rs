//! Token services.

pub mod token;

// Re-export commonly used types
pub use token::{
    create_token, decode_claims, extract_token, get_claim, get_subject, validate_token,
    TokenBuilder, TokenService, TokenServiceConfig, AUTHORIZATION_HEADER, DEFAULT_ALGORITHM,
    TOKEN_PREFIX,
};
