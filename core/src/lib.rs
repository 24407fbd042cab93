//! # JwtUtil Core
//!
//! Issuing and validating HMAC-signed JSON Web Tokens.
//!
//! The crate is a thin layer over `jsonwebtoken`: it fills in defaults
//! (empty claims, HS256, `iat`/`exp` from a validity), pulls bearer tokens out
//! of `Authorization` headers and reads claims back after verification.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
