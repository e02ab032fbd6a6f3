//! Payment service.
//!
//! Payments record money a user paid, optionally against one of their bookings. The
//! payer and the booking are fixed at creation; admins see and manage every payment.

use sea_orm::DatabaseConnection;

use crate::{
    model::payment::{CreatePaymentDto, UpdatePaymentDto},
    server::{
        data::{booking::BookingRepository, payment::PaymentRepository},
        error::AppError,
        model::{
            payment::{
                currency, required, validate_amount, validate_receipt_url, CreatePaymentParams,
                PaginatedPayments, Payment, UpdatePaymentParams,
            },
            user::User,
        },
    },
};

/// Payments per page of the paged listing.
pub const PAYMENTS_PER_PAGE: u64 = 10;

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a payment made by the caller.
    ///
    /// # Returns
    /// - `Ok(Payment)` - Created payment owned by the caller
    /// - `Err(AppError::BadRequest)` - Blank field, non-positive amount or invalid receipt URL
    /// - `Err(AppError::NotFound)` - Linked booking missing or cancelled
    /// - `Err(AppError::Forbidden)` - Linked booking belongs to someone else
    pub async fn create(&self, caller: &User, dto: CreatePaymentDto) -> Result<Payment, AppError> {
        validate_amount(dto.amount)?;
        validate_receipt_url(&dto.receipt_url)?;

        let params = CreatePaymentParams {
            user_id: caller.id,
            booking_id: dto.booking_id,
            method: required("method", &dto.method)?,
            amount: dto.amount,
            currency: currency(&dto.currency)?,
            status: required("status", &dto.status)?,
            description: required("description", &dto.description)?,
            receipt_url: dto.receipt_url.trim().to_string(),
            payment_date: dto.payment_date,
        };

        if let Some(booking_id) = params.booking_id {
            let booking = BookingRepository::new(self.db)
                .find_by_id(booking_id)
                .await?
                .filter(|b| b.is_active)
                .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

            if booking.guest_id != caller.id && !caller.is_admin() {
                return Err(AppError::Forbidden(
                    "You can only pay for your own bookings".to_string(),
                ));
            }
        }

        let payment = PaymentRepository::new(self.db).create(params).await?;

        tracing::info!(
            "User {} recorded payment {} of {} {}",
            caller.id,
            payment.id,
            payment.amount,
            payment.currency
        );

        Ok(payment)
    }

    /// Gets an active payment visible to the caller.
    ///
    /// # Returns
    /// - `Ok(Payment)` - Caller is the payer or an admin
    /// - `Err(AppError::NotFound)` - No active payment with that id
    /// - `Err(AppError::Forbidden)` - Caller is someone else
    pub async fn get_by_id(&self, caller: &User, id: i32) -> Result<Payment, AppError> {
        let payment = PaymentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|p| p.is_active)
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        if payment.user_id != caller.id && !caller.is_admin() {
            return Err(AppError::Forbidden(
                "You can only access your own payments".to_string(),
            ));
        }

        Ok(payment)
    }

    /// Lists active payments: every payment for admins, the caller's own otherwise.
    pub async fn list(&self, caller: &User) -> Result<Vec<Payment>, AppError> {
        Ok(PaymentRepository::new(self.db)
            .get_active(scope(caller))
            .await?)
    }

    /// Gets one page of the payments `list` would return.
    ///
    /// # Arguments
    /// - `page` - One-based page index
    ///
    /// # Returns
    /// - `Ok(PaginatedPayments)` - Up to `PAYMENTS_PER_PAGE` payments, echoing the one-based page
    /// - `Err(AppError::BadRequest)` - Page is zero
    pub async fn list_page(&self, caller: &User, page: u64) -> Result<PaginatedPayments, AppError> {
        if page == 0 {
            return Err(AppError::BadRequest("page starts at 1".to_string()));
        }

        let mut result = PaymentRepository::new(self.db)
            .get_active_paginated(scope(caller), page - 1, PAYMENTS_PER_PAGE)
            .await?;
        result.page = page;

        Ok(result)
    }

    /// Applies an allow-listed change to a payment the caller may see.
    pub async fn update(
        &self,
        caller: &User,
        id: i32,
        dto: UpdatePaymentDto,
    ) -> Result<Payment, AppError> {
        self.get_by_id(caller, id).await?;
        let params = UpdatePaymentParams::from_dto(id, dto)?;

        match PaymentRepository::new(self.db).update(params).await {
            Ok(payment) => Ok(payment),
            Err(sea_orm::DbErr::RecordNotFound(_)) => {
                Err(AppError::NotFound("Payment not found".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Soft-deletes a payment.
    pub async fn delete(&self, caller: &User, id: i32) -> Result<(), AppError> {
        self.get_by_id(caller, id).await?;
        PaymentRepository::new(self.db).set_active(id, false).await?;

        tracing::info!("User {} deleted payment {}", caller.id, id);

        Ok(())
    }
}

fn scope(caller: &User) -> Option<i32> {
    if caller.is_admin() {
        None
    } else {
        Some(caller.id)
    }
}
