//! Authorization header helpers

/// Prefix in front of the token in an `Authorization` header value.
pub const TOKEN_PREFIX: &str = "Bearer ";

/// Header name carrying the bearer token.
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// Extracts the token from an `Authorization` header value.
///
/// Matches [`TOKEN_PREFIX`] case-sensitively and returns everything after it,
/// without trimming. `"Bearer"` alone yields `None`; `"Bearer "` yields an
/// empty token.
pub fn extract_token(authorization_header: Option<&str>) -> Option<&str> {
    authorization_header?.strip_prefix(TOKEN_PREFIX)
}
