use crate::server::{
    data::payment::PaymentRepository,
    model::payment::{CreatePaymentParams, UpdatePaymentParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_active;
mod update;
