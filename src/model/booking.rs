use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub guest_id: i32,
    pub host_id: i32,
    pub property_id: i32,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub guests: i32,
    pub pets: i32,
    pub total_price: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingDto {
    pub property_id: i32,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub guests: i32,
    #[serde(default)]
    pub pets: i32,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateBookingDto {
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub guests: Option<i32>,
    pub pets: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingResponseDto {
    pub success: bool,
    pub booking: BookingDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingListDto {
    pub success: bool,
    pub bookings: Vec<BookingDto>,
}
