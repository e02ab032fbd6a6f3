//! Refresh token data repository.
//!
//! Issued refresh tokens are persisted so that logout and rotation can revoke them.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct RefreshTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RefreshTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::refresh_token::ActiveModel {
            token: ActiveValue::Set(token.to_string()),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Finds the owner of a stored, unexpired refresh token.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - Token is stored and not yet expired
    /// - `Ok(None)` - Token was revoked, never issued or has expired
    pub async fn find_valid(&self, token: &str) -> Result<Option<i32>, DbErr> {
        Ok(entity::prelude::RefreshToken::find()
            .filter(entity::refresh_token::Column::Token.eq(token))
            .filter(entity::refresh_token::Column::ExpiresAt.gt(Utc::now()))
            .one(self.db)
            .await?
            .map(|row| row.user_id))
    }

    /// Revokes a refresh token.
    ///
    /// # Returns
    /// - `Ok(true)` - Token deleted
    /// - `Ok(false)` - Token was not stored
    pub async fn delete(&self, token: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::RefreshToken::delete_many()
            .filter(entity::refresh_token::Column::Token.eq(token))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes expired tokens.
    pub async fn delete_expired(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::RefreshToken::delete_many()
            .filter(entity::refresh_token::Column::ExpiresAt.lte(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
