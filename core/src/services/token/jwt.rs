//! Token signing and verification

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::Value;

use crate::domain::claims::{ClaimMap, Claims};
use crate::domain::validity::Validity;
use crate::errors::{TokenError, TokenResult};

/// Algorithm used when the caller does not pick one.
pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::HS256;

/// Algorithms accepted when verifying with a shared secret.
pub const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Creates a signed token.
///
/// The payload is `claims` plus `sub`, `iat` (now) and `exp`
/// (`now + validity`, floored to whole seconds). A zero or negative validity
/// produces a token that is already expired.
///
/// # Arguments
///
/// * `subject` - Value of the `sub` claim
/// * `claims` - Custom claims; reserved names are overridden
/// * `validity` - Token lifetime, e.g. `chrono::Duration` or `(15, TimeUnit::Minutes)`
/// * `secret_key` - HMAC secret, must not be empty. Its UTF-8 bytes are the
///   key; it is not base64-decoded the way jjwt's `signWith(alg, String)` does
/// * `algorithm` - Signing algorithm; only HMAC algorithms work with a secret
///
/// # Returns
///
/// * `Ok(String)` - The compact token
/// * `Err(TokenError)` - Empty secret, time overflow, or an engine failure
pub fn create_token(
    subject: &str,
    claims: &ClaimMap,
    validity: impl Into<Validity>,
    secret_key: &str,
    algorithm: Algorithm,
) -> TokenResult<String> {
    if secret_key.is_empty() {
        return Err(TokenError::EmptySecret);
    }

    let validity = validity.into();
    let now = Utc::now().timestamp_millis();
    let expires_at = now
        .checked_add(validity.as_millis())
        .ok_or(TokenError::ValidityOverflow)?;

    let claims = Claims::new(
        subject,
        now.div_euclid(1000),
        expires_at.div_euclid(1000),
        claims.clone(),
    );

    let token = encode(
        &Header::new(algorithm),
        &claims,
        &EncodingKey::from_secret(secret_key.as_bytes()),
    )?;

    tracing::trace!(
        subject,
        algorithm = ?algorithm,
        exp = claims.exp,
        "Token created"
    );
    Ok(token)
}

/// Verifies `token` and returns its claims.
///
/// Checks the signature against any HMAC algorithm, then `exp` and `nbf`
/// when present, with no leeway. A token counts as expired from the `exp`
/// instant onward. The payload is read as a generic JSON object, so
/// registered claims of unexpected types do not fail verification.
///
/// `secret_key` is used as raw UTF-8 bytes, not base64-decoded as jjwt's
/// `setSigningKey(String)` does.
pub fn decode_claims(token: &str, secret_key: &str) -> TokenResult<Claims> {
    if secret_key.is_empty() {
        return Err(TokenError::EmptySecret);
    }

    let decoding_key = DecodingKey::from_secret(secret_key.as_bytes());
    let payload = decode::<ClaimMap>(token, &decoding_key, &verification_rules())?.claims;
    let claims = Claims::from_payload(payload);

    // The engine only rejects exp strictly before the current second.
    if claims.is_expired_at(Utc::now().timestamp_millis()) {
        return Err(ErrorKind::ExpiredSignature.into());
    }

    Ok(claims)
}

/// Returns `true` if `token` verifies under `secret_key` and has not expired.
///
/// Every failure maps to `false`; the reason is only logged. Use
/// [`decode_claims`] when the cause matters.
pub fn validate_token(token: &str, secret_key: &str) -> bool {
    match decode_claims(token, secret_key) {
        Ok(_) => true,
        Err(error) => {
            tracing::debug!(%error, "Token rejected");
            false
        }
    }
}

/// Verifies `token` and returns its subject.
pub fn get_subject(token: &str, secret_key: &str) -> TokenResult<String> {
    let claims = decode_claims(token, secret_key)?;
    match claims.sub {
        Some(subject) => Ok(subject),
        None if claims.extra.contains_key("sub") => Err(TokenError::InvalidClaim {
            claim: "sub".to_string(),
        }),
        None => Err(TokenError::MissingClaim {
            claim: "sub".to_string(),
        }),
    }
}

/// Verifies `token` and returns the claim stored under `key`, if any.
pub fn get_claim(token: &str, secret_key: &str, key: &str) -> TokenResult<Option<Value>> {
    Ok(decode_claims(token, secret_key)?.get(key))
}

fn verification_rules() -> Validation {
    let mut validation = Validation::new(DEFAULT_ALGORITHM);
    validation.algorithms = HMAC_ALGORITHMS.to_vec();
    validation.leeway = 0;
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();
    validation
}
