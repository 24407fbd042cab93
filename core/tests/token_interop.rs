//! Integration tests: tokens against plain `jsonwebtoken` and shared config

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{json, Value};

use ju_core::{
    create_token, extract_token, get_claim, get_subject, validate_token, ClaimMap, TimeUnit,
    TokenBuilder, TokenError, TokenService, DEFAULT_ALGORITHM,
};
use ju_shared::config::AppConfig;

const SECRET: &str = "interop-secret";

fn forge(payload: Value) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &payload,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

#[test]
fn test_generic_consumer_reads_registered_claims() {
    let mut claims = ClaimMap::new();
    claims.insert("role".to_string(), json!("admin"));
    let token = create_token("alice", &claims, Duration::minutes(5), SECRET, DEFAULT_ALGORITHM)
        .unwrap();

    let data = decode::<Value>(
        &token,
        &DecodingKey::from_secret(SECRET.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .unwrap();

    assert_eq!(data.header.alg, Algorithm::HS256);
    assert_eq!(data.claims["sub"], json!("alice"));
    assert_eq!(data.claims["role"], json!("admin"));
    assert!(data.claims["iat"].is_i64());
    assert!(data.claims["exp"].as_i64().unwrap() > Utc::now().timestamp());
}

#[test]
fn test_foreign_token_is_readable() {
    let exp = Utc::now().timestamp() + 600;
    let token = forge(json!({ "sub": "bob", "exp": exp, "scope": "read" }));

    assert!(validate_token(&token, SECRET));
    assert_eq!(get_subject(&token, SECRET).unwrap(), "bob");
    assert_eq!(get_claim(&token, SECRET, "scope").unwrap(), Some(json!("read")));
    assert_eq!(get_claim(&token, SECRET, "iat").unwrap(), None);
}

#[test]
fn test_foreign_token_without_subject() {
    let exp = Utc::now().timestamp() + 600;
    let token = forge(json!({ "exp": exp }));

    assert!(validate_token(&token, SECRET));
    let error = get_subject(&token, SECRET).unwrap_err();
    assert_eq!(error.to_string(), "Missing claim: sub");
}

#[test]
fn test_foreign_token_with_fractional_issued_at() {
    let now = Utc::now().timestamp();
    let iat = now as f64 + 0.5;
    let token = forge(json!({ "sub": "bob", "iat": iat, "exp": now + 600 }));

    assert!(validate_token(&token, SECRET));
    assert_eq!(get_subject(&token, SECRET).unwrap(), "bob");
    assert_eq!(get_claim(&token, SECRET, "iat").unwrap(), Some(json!(iat)));
}

#[test]
fn test_foreign_token_with_numeric_subject() {
    let exp = Utc::now().timestamp() + 600;
    let token = forge(json!({ "sub": 42, "exp": exp, "role": "admin" }));

    assert!(validate_token(&token, SECRET));
    assert_eq!(get_claim(&token, SECRET, "role").unwrap(), Some(json!("admin")));
    assert_eq!(get_claim(&token, SECRET, "sub").unwrap(), Some(json!(42)));

    let error = get_subject(&token, SECRET).unwrap_err();
    assert!(matches!(error, TokenError::InvalidClaim { ref claim } if claim == "sub"));
}

#[test]
fn test_foreign_token_with_fractional_expiry() {
    let now = Utc::now().timestamp() as f64;

    let live = forge(json!({ "sub": "bob", "exp": now + 600.25 }));
    assert!(validate_token(&live, SECRET));
    assert_eq!(get_claim(&live, SECRET, "exp").unwrap(), Some(json!(now + 600.25)));

    let expired = forge(json!({ "sub": "bob", "exp": now - 60.5 }));
    assert!(!validate_token(&expired, SECRET));
    assert!(get_subject(&expired, SECRET).unwrap_err().is_expired());
}

#[test]
fn test_foreign_expired_token() {
    let exp = Utc::now().timestamp() - 120;
    let token = forge(json!({ "sub": "bob", "exp": exp }));

    assert!(!validate_token(&token, SECRET));
    let error = get_claim(&token, SECRET, "sub").unwrap_err();
    assert!(matches!(error.jwt_kind(), Some(ErrorKind::ExpiredSignature)));
}

#[test]
fn test_foreign_token_not_yet_valid() {
    let now = Utc::now().timestamp();
    let token = forge(json!({ "sub": "bob", "nbf": now + 600, "exp": now + 1200 }));

    assert!(!validate_token(&token, SECRET));
    let error = get_subject(&token, SECRET).unwrap_err();
    assert!(matches!(error.jwt_kind(), Some(ErrorKind::ImmatureSignature)));
}

#[test]
fn test_token_without_expiry_is_accepted() {
    let token = forge(json!({ "sub": "bob" }));
    assert!(validate_token(&token, SECRET));
}

#[test]
fn test_header_to_subject_flow() {
    let token = TokenBuilder::new("carol", (1, TimeUnit::Hours))
        .claim("role", "admin")
        .sign(SECRET)
        .unwrap();
    let header_value = format!("Bearer {}", token);

    let extracted = extract_token(Some(header_value.as_str())).unwrap();
    assert!(validate_token(extracted, SECRET));
    assert_eq!(get_subject(extracted, SECRET).unwrap(), "carol");
}

#[test]
fn test_service_from_app_config() {
    let config = AppConfig::from_lookup(|key| match key {
        "ENVIRONMENT" => Some("staging".to_string()),
        "JWT_SECRET" => Some(SECRET.to_string()),
        "JWT_ALGORITHM" => Some("hs512".to_string()),
        "JWT_TOKEN_VALIDITY" => Some("120".to_string()),
        _ => None,
    });
    config.validate().unwrap();

    let service = TokenService::from_jwt_config(&config.jwt).unwrap();
    let token = service.issue("dave").unwrap();

    assert_eq!(jsonwebtoken::decode_header(&token).unwrap().alg, Algorithm::HS512);
    assert!(validate_token(&token, SECRET));

    let claims = service.claims(&token).unwrap();
    assert_eq!(claims.exp.unwrap() - claims.iat.unwrap(), 120);
}
