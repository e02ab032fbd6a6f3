//! Payment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::payment::{PaginatedPaymentsDto, PaymentDto, UpdatePaymentDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub user_id: i32,
    pub booking_id: Option<i32>,
    pub method: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub description: String,
    pub receipt_url: String,
    pub payment_date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            booking_id: entity.booking_id,
            method: entity.method,
            amount: entity.amount,
            currency: entity.currency,
            status: entity.status,
            description: entity.description,
            receipt_url: entity.receipt_url,
            payment_date: entity.payment_date,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            user_id: self.user_id,
            booking_id: self.booking_id,
            method: self.method,
            amount: self.amount,
            currency: self.currency,
            status: self.status,
            description: self.description,
            receipt_url: self.receipt_url,
            payment_date: self.payment_date,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePaymentParams {
    pub user_id: i32,
    pub booking_id: Option<i32>,
    pub method: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub description: String,
    pub receipt_url: String,
    pub payment_date: DateTime<Utc>,
}

/// Allow-listed payment changes. Owner and booking are fixed at creation.
#[derive(Debug, Clone, Default)]
pub struct UpdatePaymentParams {
    pub id: i32,
    pub method: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub receipt_url: Option<String>,
    pub payment_date: Option<DateTime<Utc>>,
}

impl UpdatePaymentParams {
    /// Validates the provided fields and trims the text ones.
    ///
    /// # Returns
    /// - `Ok(UpdatePaymentParams)` - Every provided field is valid
    /// - `Err(AppError::BadRequest)` - A provided field is blank, non-positive or not a URL
    pub fn from_dto(id: i32, dto: UpdatePaymentDto) -> Result<Self, AppError> {
        if let Some(amount) = dto.amount {
            validate_amount(amount)?;
        }
        if let Some(receipt_url) = &dto.receipt_url {
            validate_receipt_url(receipt_url)?;
        }

        Ok(Self {
            id,
            method: dto.method.map(|v| required("method", &v)).transpose()?,
            amount: dto.amount,
            currency: dto.currency.map(|v| currency(&v)).transpose()?,
            status: dto.status.map(|v| required("status", &v)).transpose()?,
            description: dto
                .description
                .map(|v| required("description", &v))
                .transpose()?,
            receipt_url: dto.receipt_url.map(|v| v.trim().to_string()),
            payment_date: dto.payment_date,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedPayments {
    pub payments: Vec<Payment>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedPayments {
    pub fn into_dto(self) -> PaginatedPaymentsDto {
        PaginatedPaymentsDto {
            success: true,
            payments: self.payments.into_iter().map(Payment::into_dto).collect(),
            total: self.total,
            page: self.page,
            entries: self.per_page,
        }
    }
}

/// Trims a required text field.
pub fn required(field: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

/// Normalizes a currency code to upper case.
pub fn currency(value: &str) -> Result<String, AppError> {
    let code = required("currency", value)?.to_uppercase();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::BadRequest(
            "currency must be a three-letter code".to_string(),
        ));
    }
    Ok(code)
}

pub fn validate_amount(amount: f64) -> Result<(), AppError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::BadRequest(
            "amount must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Accepts absolute `http` and `https` URLs only.
pub fn validate_receipt_url(value: &str) -> Result<(), AppError> {
    let invalid = || AppError::BadRequest("receipt_url must be a valid URL".to_string());

    let url = url::Url::parse(value.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    Ok(())
}
