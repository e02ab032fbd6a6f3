//! Booking domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::booking::{BookingDto, UpdateBookingDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
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

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            guest_id: entity.guest_id,
            host_id: entity.host_id,
            property_id: entity.property_id,
            check_in: entity.check_in,
            check_out: entity.check_out,
            guests: entity.guests,
            pets: entity.pets,
            total_price: entity.total_price,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    /// Guest and host of a booking may see it.
    pub fn involves(&self, user_id: i32) -> bool {
        self.guest_id == user_id || self.host_id == user_id
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            guest_id: self.guest_id,
            host_id: self.host_id,
            property_id: self.property_id,
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
            pets: self.pets,
            total_price: self.total_price,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// Number of nights between check-in and check-out, counting a partial day as a night.
///
/// # Returns
/// - `Ok(nights)` - Check-out is after check-in
/// - `Err(AppError::BadRequest)` - Check-out is not after check-in
pub fn nights_between(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Result<i64, AppError> {
    if check_out <= check_in {
        return Err(AppError::BadRequest(
            "check_out must be after check_in".to_string(),
        ));
    }

    let minutes = (check_out - check_in).num_minutes();
    Ok((minutes + 24 * 60 - 1) / (24 * 60))
}

#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub guest_id: i32,
    pub host_id: i32,
    pub property_id: i32,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub guests: i32,
    pub pets: i32,
    pub total_price: f64,
}

/// Allow-listed booking changes. The price is recomputed by the service.
#[derive(Debug, Clone, Default)]
pub struct UpdateBookingParams {
    pub id: i32,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub guests: Option<i32>,
    pub pets: Option<i32>,
    pub total_price: Option<f64>,
}

impl UpdateBookingParams {
    pub fn from_dto(id: i32, dto: UpdateBookingDto) -> Self {
        Self {
            id,
            check_in: dto.check_in,
            check_out: dto.check_out,
            guests: dto.guests,
            pets: dto.pets,
            total_price: None,
        }
    }
}
