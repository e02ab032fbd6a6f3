//! Booking service.
//!
//! A booking ties a guest to an active property for a date range. Its price is always
//! derived from the property's nightly rate, never taken from the client.

use sea_orm::DatabaseConnection;

use crate::{
    model::booking::{CreateBookingDto, UpdateBookingDto},
    server::{
        data::{booking::BookingRepository, property::PropertyRepository},
        error::AppError,
        model::{
            booking::{nights_between, Booking, CreateBookingParams, UpdateBookingParams},
            property::Property,
            user::User,
        },
    },
};

fn validate_party(property: &Property, guests: i32, pets: i32) -> Result<(), AppError> {
    if guests < 1 || guests > property.max_guests {
        return Err(AppError::BadRequest(format!(
            "guests must be between 1 and {}",
            property.max_guests
        )));
    }
    if pets < 0 {
        return Err(AppError::BadRequest("pets cannot be negative".to_string()));
    }
    Ok(())
}

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn active_property(&self, property_id: i32) -> Result<Property, AppError> {
        PropertyRepository::new(self.db)
            .find_by_id(property_id)
            .await?
            .filter(|p| p.is_active)
            .ok_or_else(|| AppError::NotFound("Property not found".to_string()))
    }

    /// Books a property for the caller.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Created booking priced at nights x nightly rate
    /// - `Err(AppError::NotFound)` - Property missing or inactive
    /// - `Err(AppError::BadRequest)` - Invalid date range or party size
    pub async fn create(&self, caller: &User, dto: CreateBookingDto) -> Result<Booking, AppError> {
        let property = self.active_property(dto.property_id).await?;

        let nights = nights_between(dto.check_in, dto.check_out)?;
        validate_party(&property, dto.guests, dto.pets)?;

        let booking = BookingRepository::new(self.db)
            .create(CreateBookingParams {
                guest_id: caller.id,
                host_id: property.host_id,
                property_id: property.id,
                check_in: dto.check_in,
                check_out: dto.check_out,
                guests: dto.guests,
                pets: dto.pets,
                total_price: nights as f64 * property.price_per_night,
            })
            .await?;

        tracing::info!(
            "User {} booked property {} ({} nights)",
            caller.id,
            property.id,
            nights
        );

        Ok(booking)
    }

    /// Gets an active booking visible to the caller.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Caller is the guest, the host or an admin
    /// - `Err(AppError::NotFound)` - No active booking with that id
    /// - `Err(AppError::Forbidden)` - Caller is not involved in the booking
    pub async fn get_by_id(&self, caller: &User, id: i32) -> Result<Booking, AppError> {
        let booking = BookingRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|b| b.is_active)
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if !booking.involves(caller.id) && !caller.is_admin() {
            return Err(AppError::Forbidden(
                "You are not part of this booking".to_string(),
            ));
        }

        Ok(booking)
    }

    pub async fn list(&self, caller: &User) -> Result<Vec<Booking>, AppError> {
        let repo = BookingRepository::new(self.db);

        if caller.is_admin() {
            Ok(repo.get_active().await?)
        } else {
            Ok(repo.get_active_for_user(caller.id).await?)
        }
    }

    /// Changes dates or party size and recomputes the price.
    pub async fn update(
        &self,
        caller: &User,
        id: i32,
        dto: UpdateBookingDto,
    ) -> Result<Booking, AppError> {
        let booking = self.get_by_id(caller, id).await?;
        let property = PropertyRepository::new(self.db)
            .find_by_id(booking.property_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Property not found".to_string()))?;

        let mut params = UpdateBookingParams::from_dto(id, dto);

        let check_in = params.check_in.unwrap_or(booking.check_in);
        let check_out = params.check_out.unwrap_or(booking.check_out);
        let nights = nights_between(check_in, check_out)?;
        validate_party(
            &property,
            params.guests.unwrap_or(booking.guests),
            params.pets.unwrap_or(booking.pets),
        )?;

        params.total_price = Some(nights as f64 * property.price_per_night);

        Ok(BookingRepository::new(self.db).update(params).await?)
    }

    /// Soft-deletes a booking.
    pub async fn cancel(&self, caller: &User, id: i32) -> Result<(), AppError> {
        self.get_by_id(caller, id).await?;
        BookingRepository::new(self.db).set_active(id, false).await?;

        tracing::info!("User {} cancelled booking {}", caller.id, id);

        Ok(())
    }
}
