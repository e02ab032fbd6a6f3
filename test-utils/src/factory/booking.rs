//! Booking factory for creating test booking entities.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active two-night booking for two guests starting a week from now.
///
/// # Arguments
/// - `db` - Database connection
/// - `property` - Booked property; its host becomes the booking host
/// - `guest_id` - Id of the booking guest
pub async fn create_booking(
    db: &DatabaseConnection,
    property: &entity::property::Model,
    guest_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    let check_in = Utc::now() + Duration::days(7);

    entity::booking::ActiveModel {
        guest_id: ActiveValue::Set(guest_id),
        host_id: ActiveValue::Set(property.host_id),
        property_id: ActiveValue::Set(property.id),
        check_in: ActiveValue::Set(check_in),
        check_out: ActiveValue::Set(check_in + Duration::days(2)),
        guests: ActiveValue::Set(2),
        pets: ActiveValue::Set(0),
        total_price: ActiveValue::Set(property.price_per_night * 2.0),
        is_active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
