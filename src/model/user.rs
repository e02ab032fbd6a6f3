use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::property::{AddressDto, ReviewDto};

/// Public view of a user. The password hash never leaves the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub description_markdown: Option<String>,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub language: Option<String>,
    pub currency: Option<String>,
    pub address: Option<AddressDto>,
    /// 0 admin, 1 host, 2 guest.
    pub role: i32,
    pub email_verified: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateUserDto {
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

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub success: bool,
    pub user: UserDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedUsersDto {
    pub success: bool,
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub entries: u64,
}

/// Review written by a user, with the property it belongs to.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserReviewDto {
    pub property_id: i32,
    #[serde(flatten)]
    pub review: ReviewDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserReviewListDto {
    pub success: bool,
    pub reviews: Vec<UserReviewDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListDto {
    pub success: bool,
    pub users: Vec<UserDto>,
}

/// In-app notification stored on the user it was sent to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub message: Option<String>,
    pub entity_type: Option<String>,
    pub entity_id: Option<String>,
    pub long_message: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SendNotificationDto {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub long_message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotificationResponseDto {
    pub success: bool,
    pub notification: NotificationDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotificationListDto {
    pub success: bool,
    pub notifications: Vec<NotificationDto>,
}
