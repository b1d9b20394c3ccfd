use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error, ErrorKind};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared_types::Principal;

const DEFAULT_TTL_MINUTES: i64 = 60;

/// Claims carried by the session token. The principal travels in the
/// token, so resolving a session needs no lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClaims {
    pub sub: i64,
    pub email: String,
    pub company_username: String,
    pub display_name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl SessionClaims {
    pub fn for_principal(principal: &Principal, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: principal.id,
            email: principal.email.clone(),
            company_username: principal.company_username.clone(),
            display_name: principal.display_name.clone(),
            role: principal.raw_role().map(str::to_string),
            department: principal.department.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(ttl_minutes)).timestamp(),
            jti: Some(uuid::Uuid::new_v4().to_string()),
        }
    }

    pub fn to_principal(&self) -> Principal {
        Principal {
            id: self.sub,
            company_username: self.company_username.clone(),
            display_name: self.display_name.clone(),
            email: self.email.clone(),
            role_key: self.role.clone(),
            role: None,
            department: self.department.clone(),
        }
    }
}

fn session_secret() -> Result<String, Error> {
    std::env::var("SESSION_SECRET")
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            tracing::error!("SESSION_SECRET is not set");
            Error::from(ErrorKind::InvalidKeyFormat)
        })
}

pub fn session_ttl_minutes() -> i64 {
    std::env::var("SESSION_TTL_MINUTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|m: &i64| *m > 0)
        .unwrap_or(DEFAULT_TTL_MINUTES)
}

pub fn encode_claims(claims: &SessionClaims) -> Result<String, Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(session_secret()?.as_bytes()),
    )
}

/// Issue a signed session token for `principal`.
pub fn create_session_token(principal: &Principal) -> Result<String, Error> {
    encode_claims(&SessionClaims::for_principal(
        principal,
        session_ttl_minutes(),
    ))
}

/// Verify signature and expiry, returning the claims.
pub fn validate_session_token(token: &str) -> Result<SessionClaims, Error> {
    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(session_secret()?.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}
