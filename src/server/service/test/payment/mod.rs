use crate::{
    model::payment::{CreatePaymentDto, UpdatePaymentDto},
    server::{error::AppError, service::payment::PaymentService},
};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

use super::as_user;

mod get_by_id;
mod list;

fn payment(booking_id: Option<i32>) -> CreatePaymentDto {
    CreatePaymentDto {
        booking_id,
        method: "card".to_string(),
        amount: 240.0,
        currency: "eur".to_string(),
        status: "completed".to_string(),
        description: "Two nights in the beach house".to_string(),
        receipt_url: "https://pay.example.com/receipts/1".to_string(),
        payment_date: Utc::now(),
    }
}
