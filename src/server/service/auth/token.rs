use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

const ACCESS_TOKEN_TTL_HOURS: i64 = 1;
const REFRESH_TOKEN_TTL_DAYS: i64 = 7;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// User id.
    pub sub: i32,
    pub role: i32,
    pub name: String,
    pub exp: usize,
}

/// Claims carried by a refresh token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: i32,
    /// Unique token id so two refresh tokens issued in the same second differ.
    pub jti: String,
    pub exp: usize,
}

struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl KeyPair {
    fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// HS256 keys for access and refresh tokens, signed with separate secrets.
#[derive(Clone)]
pub struct JwtKeys {
    access: Arc<KeyPair>,
    refresh: Arc<KeyPair>,
}

impl JwtKeys {
    pub fn new(access_secret: &str, refresh_secret: &str) -> Self {
        Self {
            access: Arc::new(KeyPair::from_secret(access_secret)),
            refresh: Arc::new(KeyPair::from_secret(refresh_secret)),
        }
    }

    /// Issues a one hour access token for the user.
    pub fn issue_access(&self, user_id: i32, role: i32, name: &str) -> Result<String, AppError> {
        let claims = AccessClaims {
            sub: user_id,
            role,
            name: name.to_string(),
            exp: expiry(Utc::now() + Duration::hours(ACCESS_TOKEN_TTL_HOURS)),
        };

        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.access.encoding,
        )?)
    }

    /// Issues a seven day refresh token and returns it with its expiry.
    pub fn issue_refresh(&self, user_id: i32) -> Result<(String, DateTime<Utc>), AppError> {
        let expires_at = Utc::now() + Duration::days(REFRESH_TOKEN_TTL_DAYS);
        let claims = RefreshClaims {
            sub: user_id,
            jti: uuid::Uuid::new_v4().to_string(),
            exp: expiry(expires_at),
        };

        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.refresh.encoding,
        )?;

        Ok((token, expires_at))
    }

    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, AuthError> {
        jsonwebtoken::decode::<AccessClaims>(
            token,
            &self.access.decoding,
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(into_auth_error)
    }

    pub fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, AuthError> {
        jsonwebtoken::decode::<RefreshClaims>(
            token,
            &self.refresh.decoding,
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(into_auth_error)
    }
}

fn expiry(at: DateTime<Utc>) -> usize {
    at.timestamp().max(0) as usize
}

fn into_auth_error(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken,
    }
}
