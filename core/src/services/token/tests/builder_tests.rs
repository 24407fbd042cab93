//! Unit tests for the token builder

use chrono::Duration;
use jsonwebtoken::Algorithm;
use serde_json::json;

use crate::domain::claims::ClaimMap;
use crate::domain::validity::TimeUnit;
use crate::services::token::{decode_claims, get_claim, validate_token, TokenBuilder};

const SECRET: &str = "builder-secret";

#[test]
fn test_defaults_to_empty_claims_and_hs256() {
    let token = TokenBuilder::new("alice", Duration::minutes(10)).sign(SECRET).unwrap();

    let header = jsonwebtoken::decode_header(&token).unwrap();
    assert_eq!(header.alg, Algorithm::HS256);

    let claims = decode_claims(&token, SECRET).unwrap();
    assert_eq!(claims.subject(), Some("alice"));
    assert!(claims.extra.is_empty());
}

#[test]
fn test_amount_and_unit_validity() {
    let token = TokenBuilder::new("alice", (2, TimeUnit::Hours)).sign(SECRET).unwrap();

    let claims = decode_claims(&token, SECRET).unwrap();
    assert_eq!(claims.exp.unwrap() - claims.iat.unwrap(), 7_200);
}

#[test]
fn test_claims_are_merged() {
    let mut base = ClaimMap::new();
    base.insert("role".to_string(), json!("user"));
    base.insert("tenant".to_string(), json!("acme"));

    let token = TokenBuilder::new("alice", Duration::minutes(1))
        .claims(base)
        .claim("role", "admin")
        .claim("level", 3)
        .sign(SECRET)
        .unwrap();

    assert_eq!(get_claim(&token, SECRET, "role").unwrap(), Some(json!("admin")));
    assert_eq!(get_claim(&token, SECRET, "tenant").unwrap(), Some(json!("acme")));
    assert_eq!(get_claim(&token, SECRET, "level").unwrap(), Some(json!(3)));
}

#[test]
fn test_explicit_algorithm() {
    let builder = TokenBuilder::new("alice", Duration::minutes(1)).algorithm(Algorithm::HS512);
    let token = builder.sign(SECRET).unwrap();

    assert_eq!(jsonwebtoken::decode_header(&token).unwrap().alg, Algorithm::HS512);
    assert!(validate_token(&token, SECRET));
}

#[test]
fn test_builder_is_reusable() {
    let builder = TokenBuilder::new("alice", Duration::minutes(1)).claim("role", "admin");

    let first = builder.sign(SECRET).unwrap();
    let second = builder.sign("other-secret").unwrap();

    assert!(validate_token(&first, SECRET));
    assert!(validate_token(&second, "other-secret"));
    assert!(!validate_token(&second, SECRET));
}
