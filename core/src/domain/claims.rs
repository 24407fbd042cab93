//! Claims set embedded in a token payload.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Custom claims keyed by name.
pub type ClaimMap = serde_json::Map<String, Value>;

/// Registered claim names managed by this crate.
pub const RESERVED_CLAIMS: [&str; 3] = ["sub", "iat", "exp"];

/// Claims structure for JWT payload
///
/// The registered fields are optional so that tokens minted elsewhere still
/// decode; tokens created here always carry all three.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Issued at, seconds since the epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration, seconds since the epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Every other claim
    #[serde(flatten)]
    pub extra: ClaimMap,
}

impl Claims {
    /// Builds a claims set for a new token.
    ///
    /// Reserved names found in `extra` are dropped: the explicit subject and
    /// timestamps always win.
    pub fn new(subject: impl Into<String>, issued_at: i64, expires_at: i64, mut extra: ClaimMap) -> Self {
        for reserved in RESERVED_CLAIMS {
            if extra.remove(reserved).is_some() {
                tracing::warn!(claim = reserved, "Custom claim overridden by registered claim");
            }
        }

        Self {
            sub: Some(subject.into()),
            iat: Some(issued_at),
            exp: Some(expires_at),
            extra,
        }
    }

    /// Builds a claims set from a decoded payload of any shape.
    ///
    /// Registered claims are lifted into their typed fields only when they
    /// have the expected type (`sub` a string, `iat`/`exp` integers);
    /// otherwise the raw value stays in `extra` under its own name.
    pub fn from_payload(mut payload: ClaimMap) -> Self {
        let sub = take_typed(&mut payload, "sub", |v| v.as_str().map(str::to_owned));
        let iat = take_typed(&mut payload, "iat", Value::as_i64);
        let exp = take_typed(&mut payload, "exp", Value::as_i64);

        Self {
            sub,
            iat,
            exp,
            extra: payload,
        }
    }

    /// Subject, if the token carries one
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    /// Looks up any claim by name, registered ones included.
    pub fn get(&self, key: &str) -> Option<Value> {
        let registered = match key {
            "sub" => self.sub.clone().map(Value::String),
            "iat" => self.iat.map(Value::from),
            "exp" => self.exp.map(Value::from),
            _ => None,
        };
        registered.or_else(|| self.extra.get(key).cloned())
    }

    /// Issued-at as a UTC timestamp
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.iat.and_then(|iat| Utc.timestamp_opt(iat, 0).single())
    }

    /// Expiration as a UTC timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| Utc.timestamp_opt(exp, 0).single())
    }

    /// Whether the expiration instant has been reached at `now_millis`.
    ///
    /// A claims set without a numeric `exp` never expires.
    pub fn is_expired_at(&self, now_millis: i64) -> bool {
        match self.expiry_millis() {
            Some(exp) => exp <= now_millis,
            None => false,
        }
    }

    /// `exp` in milliseconds, fractional seconds included.
    fn expiry_millis(&self) -> Option<i64> {
        match self.exp {
            Some(exp) => Some(exp.saturating_mul(1000)),
            None => self
                .extra
                .get("exp")
                .and_then(Value::as_f64)
                .map(|exp| (exp * 1000.0).floor() as i64),
        }
    }
}

fn take_typed<T>(payload: &mut ClaimMap, key: &str, convert: impl Fn(&Value) -> Option<T>) -> Option<T> {
    let value = payload.get(key).and_then(convert)?;
    payload.remove(key);
    Some(value)
}
