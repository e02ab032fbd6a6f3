//! User data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::user::NotificationDto,
    server::model::{
        encode_json,
        user::{CreateUserParams, PaginatedUsers, UpdateUserParams, User, UserRole},
    },
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active, unverified user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.as_i32()),
            email_verified: ActiveValue::Set(false),
            is_active: ActiveValue::Set(true),
            notifications: ActiveValue::Set(serde_json::Value::Array(Vec::new())),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds an active user by email address. Deactivated accounts are skipped.
    pub async fn find_active_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .filter(entity::user::Column::IsActive.eq(true))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Gets every active user holding a role, ordered by id.
    pub async fn get_active_by_role(&self, role: UserRole) -> Result<Vec<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role.as_i32()))
            .filter(entity::user::Column::IsActive.eq(true))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Gets users ordered by id with pagination.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index
    /// - `per_page` - Number of users per page
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Page of users with the total count
    /// - `Err(DbErr)` - Database error
    pub async fn get_all_paginated(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
        })
    }

    /// Applies allow-listed profile changes.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that id
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        if let Some(username) = params.username {
            active_model.username = ActiveValue::Set(username);
        }
        if let Some(first_name) = params.first_name {
            active_model.first_name = ActiveValue::Set(Some(first_name));
        }
        if let Some(last_name) = params.last_name {
            active_model.last_name = ActiveValue::Set(Some(last_name));
        }
        if let Some(description) = params.description_markdown {
            active_model.description_markdown = ActiveValue::Set(Some(description));
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(profile_picture) = params.profile_picture {
            active_model.profile_picture = ActiveValue::Set(Some(profile_picture));
        }
        if let Some(date_of_birth) = params.date_of_birth {
            active_model.date_of_birth = ActiveValue::Set(Some(date_of_birth));
        }
        if let Some(language) = params.language {
            active_model.language = ActiveValue::Set(Some(language));
        }
        if let Some(currency) = params.currency {
            active_model.currency = ActiveValue::Set(Some(currency));
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(Some(encode_json("user.address", &address)?));
        }

        User::from_entity(active_model.update(self.db).await?)
    }

    /// Sets a user's role.
    pub async fn set_role(&self, id: i32, role: UserRole) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Role, Expr::value(role.as_i32()))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets the active flag. Deactivated users cannot authenticate.
    ///
    /// # Returns
    /// - `Ok(true)` - User found and updated
    /// - `Ok(false)` - No user with that id
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::IsActive, Expr::value(is_active))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Replaces the stored notification list.
    ///
    /// # Returns
    /// - `Ok(())` - List stored
    /// - `Err(DbErr::RecordNotFound)` - No user with that id
    /// - `Err(DbErr)` - Other database error
    pub async fn set_notifications(
        &self,
        id: i32,
        notifications: &[NotificationDto],
    ) -> Result<(), DbErr> {
        let value = encode_json("user.notifications", &notifications)?;

        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Notifications, Expr::value(value))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Records a successful login.
    pub async fn touch_last_login(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::LastLogin, Expr::value(Some(Utc::now())))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
