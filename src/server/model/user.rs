//! User domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        property::AddressDto,
        user::{NotificationDto, UpdateUserDto, UserDto},
    },
    server::model::decode_json,
};

/// Account role. Stored as its integer discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin = 0,
    Host = 1,
    Guest = 2,
}

impl UserRole {
    /// Maps a stored role value, treating unknown values as the least privileged role.
    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => Self::Admin,
            1 => Self::Host,
            _ => Self::Guest,
        }
    }

    /// Maps a requested role value, rejecting anything outside `0..=2`.
    pub fn try_from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Admin),
            1 => Some(Self::Host),
            2 => Some(Self::Guest),
            _ => None,
        }
    }

    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub description_markdown: Option<String>,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub language: Option<String>,
    pub currency: Option<String>,
    pub address: Option<AddressDto>,
    /// Oldest first. Never exposed through `UserDto`.
    pub notifications: Vec<NotificationDto>,
    pub role: UserRole,
    pub email_verified: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - Converted user
    /// - `Err(DbErr::Json)` - Stored address or notifications could not be decoded
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let address = match entity.address {
            Some(value) => Some(decode_json("user.address", value)?),
            None => None,
        };
        let notifications = match entity.notifications {
            serde_json::Value::Null => Vec::new(),
            value => decode_json("user.notifications", value)?,
        };

        Ok(Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            first_name: entity.first_name,
            last_name: entity.last_name,
            description_markdown: entity.description_markdown,
            phone: entity.phone,
            profile_picture: entity.profile_picture,
            date_of_birth: entity.date_of_birth,
            language: entity.language,
            currency: entity.currency,
            address,
            notifications,
            role: UserRole::from_i32(entity.role),
            email_verified: entity.email_verified,
            is_active: entity.is_active,
            created_at: entity.created_at,
            last_login: entity.last_login,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Whether the user may list and manage properties.
    pub fn is_host(&self) -> bool {
        matches!(self.role, UserRole::Host | UserRole::Admin)
    }

    /// Converts the domain model to a DTO, dropping the password hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            description_markdown: self.description_markdown,
            phone: self.phone,
            profile_picture: self.profile_picture,
            date_of_birth: self.date_of_birth,
            language: self.language,
            currency: self.currency,
            address: self.address,
            role: self.role.as_i32(),
            email_verified: self.email_verified,
            is_active: self.is_active,
            created_at: self.created_at,
            last_login: self.last_login,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Allow-listed profile changes. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub id: i32,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub description_markdown: Option<String>,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub language: Option<String>,
    pub currency: Option<String>,
    pub address: Option<AddressDto>,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Self {
        Self {
            id,
            username: dto.username,
            first_name: dto.first_name,
            last_name: dto.last_name,
            description_markdown: dto.description_markdown,
            phone: dto.phone,
            profile_picture: dto.profile_picture,
            date_of_birth: dto.date_of_birth,
            language: dto.language,
            currency: dto.currency,
            address: dto.address,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> crate::model::user::PaginatedUsersDto {
        crate::model::user::PaginatedUsersDto {
            success: true,
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            entries: self.per_page,
        }
    }
}
