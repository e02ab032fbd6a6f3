//! User service for account management.
//!
//! Users may read and edit their own profile; admins may read and edit any profile and
//! list every account. Notifications live on the user row; admins send them and the
//! recipient reads and acknowledges them.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{NotificationDto, SendNotificationDto, UpdateUserDto},
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{PaginatedUsers, UpdateUserParams, User, UserRole},
    },
};

/// Read notifications kept when a new one arrives. Unread ones are never pruned.
const KEPT_READ_NOTIFICATIONS: usize = 2;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn ensure_self_or_admin(caller: &User, id: i32) -> Result<(), AppError> {
        if caller.id != id && !caller.is_admin() {
            return Err(AppError::Forbidden(
                "You can only access your own account".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        if per_page == 0 {
            return Err(AppError::BadRequest(
                "entries must be greater than zero".to_string(),
            ));
        }

        Ok(UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?)
    }

    /// Gets a user visible to the caller.
    ///
    /// # Returns
    /// - `Ok(User)` - Caller is the user or an admin
    /// - `Err(AppError::Forbidden)` - Caller is someone else
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_by_id(&self, caller: &User, id: i32) -> Result<User, AppError> {
        Self::ensure_self_or_admin(caller, id)?;

        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Applies an allow-listed profile patch.
    pub async fn update(&self, caller: &User, id: i32, dto: UpdateUserDto) -> Result<User, AppError> {
        Self::ensure_self_or_admin(caller, id)?;

        if dto.username.as_deref().is_some_and(|u| u.trim().is_empty()) {
            return Err(AppError::BadRequest("username cannot be empty".to_string()));
        }

        match UserRepository::new(self.db)
            .update(UpdateUserParams::from_dto(id, dto))
            .await
        {
            Ok(user) => Ok(user),
            Err(sea_orm::DbErr::RecordNotFound(_)) => {
                Err(AppError::NotFound("User not found".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Soft-deletes an account.
    pub async fn deactivate(&self, caller: &User, id: i32) -> Result<(), AppError> {
        Self::ensure_self_or_admin(caller, id)?;

        if !UserRepository::new(self.db).set_active(id, false).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("User {} deactivated account {}", caller.id, id);

        Ok(())
    }

    /// Lists the active users holding a role.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Active users, ordered by id
    /// - `Err(AppError::BadRequest)` - Role outside `0..=2`
    pub async fn get_by_role(&self, role: i32) -> Result<Vec<User>, AppError> {
        let role = UserRole::try_from_i32(role)
            .ok_or_else(|| AppError::BadRequest("Role must be 0, 1, or 2".to_string()))?;

        Ok(UserRepository::new(self.db).get_active_by_role(role).await?)
    }

    /// Looks up an active account by email.
    ///
    /// # Returns
    /// - `Ok(User)` - Active user with that email
    /// - `Err(AppError::NotFound)` - No such user, or the account is deactivated
    pub async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_active_by_email(&email.trim().to_lowercase())
            .await?
            .ok_or_else(|| AppError::NotFound("User not found or inactive".to_string()))
    }

    /// Lists a user's notifications, oldest first.
    pub async fn get_notifications(
        &self,
        caller: &User,
        id: i32,
    ) -> Result<Vec<NotificationDto>, AppError> {
        Self::ensure_self_or_admin(caller, id)?;

        Ok(self.active_user(id).await?.notifications)
    }

    /// Appends an unread notification to a user.
    ///
    /// Read notifications beyond the newest two are dropped first.
    ///
    /// # Returns
    /// - `Ok(NotificationDto)` - The stored notification
    /// - `Err(AppError::BadRequest)` - Blank `type`
    /// - `Err(AppError::NotFound)` - No such user, or the account is deactivated
    pub async fn send_notification(
        &self,
        caller: &User,
        id: i32,
        dto: SendNotificationDto,
    ) -> Result<NotificationDto, AppError> {
        let kind = dto.kind.trim();
        if kind.is_empty() {
            return Err(AppError::BadRequest(
                "Notification type is required".to_string(),
            ));
        }

        let mut notifications = self.active_user(id).await?.notifications;
        prune_read(&mut notifications);

        let now = Utc::now();
        let notification = NotificationDto {
            id: uuid::Uuid::new_v4().to_string(),
            kind: kind.to_string(),
            title: dto.title,
            icon: dto.icon,
            message: dto.message,
            entity_type: dto.entity_type,
            entity_id: dto.entity_id,
            long_message: dto.long_message,
            is_read: false,
            created_at: now,
            updated_at: now,
        };
        notifications.push(notification.clone());

        UserRepository::new(self.db)
            .set_notifications(id, &notifications)
            .await?;

        tracing::info!(
            "User {} sent notification {} to user {}",
            caller.id,
            notification.id,
            id
        );

        Ok(notification)
    }

    /// Marks one of a user's notifications as read.
    ///
    /// # Returns
    /// - `Ok(NotificationDto)` - The updated notification
    /// - `Err(AppError::Forbidden)` - Caller is neither the user nor an admin
    /// - `Err(AppError::NotFound)` - Unknown or inactive user, or unknown notification
    pub async fn mark_notification_read(
        &self,
        caller: &User,
        id: i32,
        notification_id: &str,
    ) -> Result<NotificationDto, AppError> {
        Self::ensure_self_or_admin(caller, id)?;

        let mut notifications = self.active_user(id).await?.notifications;
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

        notification.is_read = true;
        notification.updated_at = Utc::now();
        let updated = notification.clone();

        UserRepository::new(self.db)
            .set_notifications(id, &notifications)
            .await?;

        Ok(updated)
    }

    async fn active_user(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|user| user.is_active)
            .ok_or_else(|| AppError::NotFound("User not found or inactive".to_string()))
    }
}

/// Drops the oldest read notifications so at most `KEPT_READ_NOTIFICATIONS` remain.
fn prune_read(notifications: &mut Vec<NotificationDto>) {
    let read = notifications.iter().filter(|n| n.is_read).count();
    let mut excess = read.saturating_sub(KEPT_READ_NOTIFICATIONS);

    notifications.retain(|n| {
        if n.is_read && excess > 0 {
            excess -= 1;
            return false;
        }
        true
    });
}
