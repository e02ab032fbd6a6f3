//! Payment factory for creating test payment entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test payments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::payment::PaymentFactory;
///
/// let payment = PaymentFactory::new(&db, guest.id)
///     .amount(240.0)
///     .booking_id(booking.id)
///     .build()
///     .await?;
/// ```
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    booking_id: Option<i32>,
    amount: f64,
    status: String,
    payment_date: DateTime<Utc>,
    is_active: bool,
}

impl<'a> PaymentFactory<'a> {
    /// Creates a new PaymentFactory with default values.
    ///
    /// Defaults:
    /// - booking_id: `None`
    /// - amount: `100.0` EUR by transfer
    /// - status: `"completed"`
    /// - payment_date: now
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            booking_id: None,
            amount: 100.0,
            status: "completed".to_string(),
            payment_date: Utc::now(),
            is_active: true,
        }
    }

    pub fn booking_id(mut self, booking_id: i32) -> Self {
        self.booking_id = Some(booking_id);
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn payment_date(mut self, payment_date: DateTime<Utc>) -> Self {
        self.payment_date = payment_date;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the payment entity into the database.
    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            booking_id: ActiveValue::Set(self.booking_id),
            method: ActiveValue::Set("transfer".to_string()),
            amount: ActiveValue::Set(self.amount),
            currency: ActiveValue::Set("EUR".to_string()),
            status: ActiveValue::Set(self.status),
            description: ActiveValue::Set("Stay payment".to_string()),
            receipt_url: ActiveValue::Set("https://pay.example.com/receipt".to_string()),
            payment_date: ActiveValue::Set(self.payment_date),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active payment by the user with default values.
pub async fn create_payment(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, user_id).build().await
}
