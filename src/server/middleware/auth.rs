use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::token::JwtKeys,
};

pub enum Permission {
    /// Caller must be an admin.
    Admin,
    /// Caller must be a host or an admin.
    Host,
}

/// Authenticates the bearer token of a request and checks the caller's role.
///
/// Every protected controller constructs a guard and calls [`AuthGuard::require`] before
/// touching any service.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    /// Resolves the authenticated user and checks every required permission.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the caller must hold; empty for any active user
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated, active user
    /// - `Err(AuthError::MissingToken)` - No bearer token
    /// - `Err(AuthError::InvalidToken | TokenExpired)` - Token rejected
    /// - `Err(AuthError::UserNotFound)` - Token subject no longer exists
    /// - `Err(AuthError::UserInactive)` - User deactivated
    /// - `Err(AuthError::AccessDenied)` - A permission is not met
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let claims = self.jwt.verify_access(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotFound(claims.sub).into());
        };

        if !user.is_active {
            return Err(AuthError::UserInactive(user.id).into());
        }

        for permission in permissions {
            let allowed = match permission {
                Permission::Admin => user.is_admin(),
                Permission::Host => user.is_host(),
            };
            if !allowed {
                return Err(AuthError::AccessDenied(user.id).into());
            }
        }

        Ok(user)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
