//! Payment data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::payment::{
    CreatePaymentParams, PaginatedPayments, Payment, UpdatePaymentParams,
};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePaymentParams) -> Result<Payment, DbErr> {
        let entity = entity::payment::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            booking_id: ActiveValue::Set(params.booking_id),
            method: ActiveValue::Set(params.method),
            amount: ActiveValue::Set(params.amount),
            currency: ActiveValue::Set(params.currency),
            status: ActiveValue::Set(params.status),
            description: ActiveValue::Set(params.description),
            receipt_url: ActiveValue::Set(params.receipt_url),
            payment_date: ActiveValue::Set(params.payment_date),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Payment>, DbErr> {
        Ok(entity::prelude::Payment::find_by_id(id)
            .one(self.db)
            .await?
            .map(Payment::from_entity))
    }

    /// Gets active payments, newest payment date first.
    ///
    /// # Arguments
    /// - `user_id` - Restrict to one payer, or `None` for every payer
    pub async fn get_active(&self, user_id: Option<i32>) -> Result<Vec<Payment>, DbErr> {
        Ok(active(user_id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Payment::from_entity)
            .collect())
    }

    /// Gets a page of active payments, newest payment date first.
    ///
    /// # Arguments
    /// - `user_id` - Restrict to one payer, or `None` for every payer
    /// - `page` - Zero-based page index
    /// - `per_page` - Number of payments per page
    pub async fn get_active_paginated(
        &self,
        user_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedPayments, DbErr> {
        let paginator = active(user_id).paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let payments = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Payment::from_entity)
            .collect();

        Ok(PaginatedPayments {
            payments,
            total,
            page,
            per_page,
        })
    }

    /// Applies allow-listed payment changes and stamps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Payment)` - The updated payment
    /// - `Err(DbErr::RecordNotFound)` - No payment with that id
    pub async fn update(&self, params: UpdatePaymentParams) -> Result<Payment, DbErr> {
        let payment = entity::prelude::Payment::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Payment with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::payment::ActiveModel = payment.into();
        if let Some(method) = params.method {
            active_model.method = ActiveValue::Set(method);
        }
        if let Some(amount) = params.amount {
            active_model.amount = ActiveValue::Set(amount);
        }
        if let Some(currency) = params.currency {
            active_model.currency = ActiveValue::Set(currency);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(receipt_url) = params.receipt_url {
            active_model.receipt_url = ActiveValue::Set(receipt_url);
        }
        if let Some(payment_date) = params.payment_date {
            active_model.payment_date = ActiveValue::Set(payment_date);
        }
        active_model.updated_at = ActiveValue::Set(Some(Utc::now()));

        Ok(Payment::from_entity(active_model.update(self.db).await?))
    }

    /// Sets the active flag. Payments are soft-deleted, never removed.
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Payment::update_many()
            .col_expr(entity::payment::Column::IsActive, Expr::value(is_active))
            .col_expr(
                entity::payment::Column::UpdatedAt,
                Expr::value(Some(Utc::now())),
            )
            .filter(entity::payment::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn active(user_id: Option<i32>) -> Select<entity::prelude::Payment> {
    let mut query = entity::prelude::Payment::find()
        .filter(entity::payment::Column::IsActive.eq(true));
    if let Some(user_id) = user_id {
        query = query.filter(entity::payment::Column::UserId.eq(user_id));
    }
    query
        .order_by_desc(entity::payment::Column::PaymentDate)
        .order_by_desc(entity::payment::Column::Id)
}
