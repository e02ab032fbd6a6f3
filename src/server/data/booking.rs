//! Booking data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::booking::{Booking, CreateBookingParams, UpdateBookingParams};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            guest_id: ActiveValue::Set(params.guest_id),
            host_id: ActiveValue::Set(params.host_id),
            property_id: ActiveValue::Set(params.property_id),
            check_in: ActiveValue::Set(params.check_in),
            check_out: ActiveValue::Set(params.check_out),
            guests: ActiveValue::Set(params.guests),
            pets: ActiveValue::Set(params.pets),
            total_price: ActiveValue::Set(params.total_price),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        Ok(entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .map(Booking::from_entity))
    }

    /// Gets every active booking, earliest check-in first.
    pub async fn get_active(&self) -> Result<Vec<Booking>, DbErr> {
        Ok(entity::prelude::Booking::find()
            .filter(entity::booking::Column::IsActive.eq(true))
            .order_by_asc(entity::booking::Column::CheckIn)
            .all(self.db)
            .await?
            .into_iter()
            .map(Booking::from_entity)
            .collect())
    }

    /// Gets active bookings where the user is either the guest or the host.
    pub async fn get_active_for_user(&self, user_id: i32) -> Result<Vec<Booking>, DbErr> {
        Ok(entity::prelude::Booking::find()
            .filter(entity::booking::Column::IsActive.eq(true))
            .filter(
                Condition::any()
                    .add(entity::booking::Column::GuestId.eq(user_id))
                    .add(entity::booking::Column::HostId.eq(user_id)),
            )
            .order_by_asc(entity::booking::Column::CheckIn)
            .all(self.db)
            .await?
            .into_iter()
            .map(Booking::from_entity)
            .collect())
    }

    /// Applies allow-listed booking changes.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The updated booking
    /// - `Err(DbErr::RecordNotFound)` - No booking with that id
    pub async fn update(&self, params: UpdateBookingParams) -> Result<Booking, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Booking with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::booking::ActiveModel = booking.into();
        if let Some(check_in) = params.check_in {
            active_model.check_in = ActiveValue::Set(check_in);
        }
        if let Some(check_out) = params.check_out {
            active_model.check_out = ActiveValue::Set(check_out);
        }
        if let Some(guests) = params.guests {
            active_model.guests = ActiveValue::Set(guests);
        }
        if let Some(pets) = params.pets {
            active_model.pets = ActiveValue::Set(pets);
        }
        if let Some(total_price) = params.total_price {
            active_model.total_price = ActiveValue::Set(total_price);
        }

        Ok(Booking::from_entity(active_model.update(self.db).await?))
    }

    /// Sets the active flag. Bookings are cancelled, never deleted.
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(entity::booking::Column::IsActive, Expr::value(is_active))
            .filter(entity::booking::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
