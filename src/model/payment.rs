use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentDto {
    pub id: i32,
    pub user_id: i32,
    pub booking_id: Option<i32>,
    pub method: String,
    pub amount: f64,
    /// ISO 4217 code, e.g. `EUR`.
    pub currency: String,
    pub status: String,
    pub description: String,
    pub receipt_url: String,
    pub payment_date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentDto {
    #[serde(default)]
    pub booking_id: Option<i32>,
    pub method: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub description: String,
    pub receipt_url: String,
    pub payment_date: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdatePaymentDto {
    pub method: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub receipt_url: Option<String>,
    pub payment_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponseDto {
    pub success: bool,
    pub payment: PaymentDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentListDto {
    pub success: bool,
    pub payments: Vec<PaymentDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedPaymentsDto {
    pub success: bool,
    pub payments: Vec<PaymentDto>,
    pub total: u64,
    /// One-based page index.
    pub page: u64,
    pub entries: u64,
}
