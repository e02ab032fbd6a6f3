//! Registration, login and token lifecycle.
//!
//! Access tokens are short-lived and stateless. Refresh tokens are persisted on issue so
//! that logout can revoke them; a refresh is only honored while the token is both
//! cryptographically valid and still stored.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{refresh_token::RefreshTokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, User, UserRole},
    service::auth::{
        password::{hash_password, verify_password},
        token::JwtKeys,
    },
};

#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Tokens issued on register or login, with the authenticated user.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys) -> Self {
        Self { db, jwt }
    }

    /// Creates a guest account and signs it in.
    ///
    /// # Arguments
    /// - `params` - Username, email and plain-text password, all required
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Tokens for the new user
    /// - `Err(AppError::BadRequest)` - A field is blank or the email is taken
    /// - `Err(AppError)` - Hashing, token or database failure
    pub async fn register(&self, params: RegisterParams) -> Result<TokenPair, AppError> {
        let username = params.username.trim();
        let email = params.email.trim().to_lowercase();

        if username.is_empty() || email.is_empty() || params.password.is_empty() {
            return Err(AppError::BadRequest(
                "username, email and password are required".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest(
                "Email is already registered".to_string(),
            ));
        }

        let user = user_repo
            .create(CreateUserParams {
                username: username.to_string(),
                email,
                password_hash: hash_password(&params.password)?,
                role: UserRole::Guest,
            })
            .await?;

        tracing::info!("Registered user {}", user.id);

        self.issue_tokens(user).await
    }

    /// Verifies credentials and signs the user in.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Tokens for the user
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::UserInactive)` - Account deactivated
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo
            .find_by_email(&email.trim().to_lowercase())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }
        if !user.is_active {
            return Err(AuthError::UserInactive(user.id).into());
        }

        user_repo.touch_last_login(user.id).await?;
        let user = user_repo
            .find_by_id(user.id)
            .await?
            .ok_or(AuthError::UserNotFound(user.id))?;

        self.issue_tokens(user).await
    }

    /// Exchanges a stored refresh token for a new access token.
    ///
    /// # Returns
    /// - `Ok(String)` - New access token
    /// - `Err(AuthError::InvalidToken)` - Token is forged, revoked or belongs to someone else
    /// - `Err(AuthError::TokenExpired)` - Token is past its expiry
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, AppError> {
        let claims = self.jwt.verify_refresh(refresh_token)?;

        let stored_owner = RefreshTokenRepository::new(self.db)
            .find_valid(refresh_token)
            .await?;
        if stored_owner != Some(claims.sub) {
            return Err(AuthError::InvalidToken.into());
        }

        let user = UserRepository::new(self.db)
            .find_by_id(claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound(claims.sub))?;
        if !user.is_active {
            return Err(AuthError::UserInactive(user.id).into());
        }

        self.jwt
            .issue_access(user.id, user.role.as_i32(), &user.username)
    }

    /// Revokes a refresh token.
    ///
    /// # Returns
    /// - `Ok(true)` - Token was stored and is now revoked
    /// - `Ok(false)` - Token was not stored
    pub async fn logout(&self, refresh_token: &str) -> Result<bool, AppError> {
        Ok(RefreshTokenRepository::new(self.db)
            .delete(refresh_token)
            .await?)
    }

    /// Decodes a token of the given kind without touching the refresh token store.
    ///
    /// # Arguments
    /// - `token` - Encoded JWT
    /// - `kind` - `"access"` or `"refresh"`
    ///
    /// # Returns
    /// - `Ok(Value)` - Decoded claims
    /// - `Err(AppError::BadRequest)` - Blank token or unknown kind
    /// - `Err(AuthError::InvalidToken)` / `Err(AuthError::TokenExpired)` - Token rejected
    pub fn verify_token(&self, token: &str, kind: &str) -> Result<serde_json::Value, AppError> {
        if token.trim().is_empty() {
            return Err(AppError::BadRequest("Token and type are required".to_string()));
        }

        let decoded = match kind {
            "access" => serde_json::to_value(self.jwt.verify_access(token)?),
            "refresh" => serde_json::to_value(self.jwt.verify_refresh(token)?),
            _ => return Err(AppError::BadRequest("Invalid token type".to_string())),
        };

        decoded.map_err(|e| AppError::InternalError(format!("Failed to encode claims: {}", e)))
    }

    async fn issue_tokens(&self, user: User) -> Result<TokenPair, AppError> {
        let access_token = self
            .jwt
            .issue_access(user.id, user.role.as_i32(), &user.username)?;
        let (refresh_token, expires_at) = self.jwt.issue_refresh(user.id)?;

        RefreshTokenRepository::new(self.db)
            .create(user.id, &refresh_token, expires_at)
            .await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            user,
        })
    }
}
