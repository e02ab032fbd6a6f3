use crate::{
    model::booking::{CreateBookingDto, UpdateBookingDto},
    server::{error::AppError, service::booking::BookingService},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

use super::as_user;

mod update;

fn stay(property_id: i32, nights: i64, guests: i32) -> CreateBookingDto {
    let check_in = Utc::now() + Duration::days(10);
    CreateBookingDto {
        property_id,
        check_in,
        check_out: check_in + Duration::days(nights),
        guests,
        pets: 0,
    }
}
