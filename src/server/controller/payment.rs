use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        payment::{
            CreatePaymentDto, PaginatedPaymentsDto, PaymentListDto, PaymentResponseDto,
            UpdatePaymentDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::payment::Payment,
        service::payment::PaymentService, state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

fn payment_response(status: StatusCode, payment: Payment) -> impl IntoResponse {
    (
        status,
        Json(PaymentResponseDto {
            success: true,
            payment: payment.into_dto(),
        }),
    )
}

/// List active payments visible to the caller.
///
/// Admins see every active payment; other users see their own.
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "Active payments", body = PaymentListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_payments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let payments = PaymentService::new(&state.db).list(&caller).await?;

    Ok((
        StatusCode::OK,
        Json(PaymentListDto {
            success: true,
            payments: payments.into_iter().map(|p| p.into_dto()).collect(),
        }),
    ))
}

/// List one page of the caller's visible payments, ten per page.
#[utoipa::path(
    get,
    path = "/api/payments/page/{page}",
    tag = PAYMENT_TAG,
    params(("page" = u64, Path, description = "One-based page index")),
    responses(
        (status = 200, description = "Page of active payments", body = PaginatedPaymentsDto),
        (status = 400, description = "Page is zero", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_payments_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(page): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let payments = PaymentService::new(&state.db)
        .list_page(&caller, page)
        .await?;

    Ok((StatusCode::OK, Json(payments.into_dto())))
}

/// Record a payment made by the caller.
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment recorded", body = PaymentResponseDto),
        (status = 400, description = "Missing field, invalid amount or receipt URL", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Booking belongs to someone else", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let payment = PaymentService::new(&state.db)
        .create(&caller, payload)
        .await?;

    Ok(payment_response(StatusCode::CREATED, payment))
}

/// Get an active payment by id.
///
/// # Access Control
/// - The payer, or an admin
#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment id")),
    responses(
        (status = 200, description = "Payment", body = PaymentResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the payer or an admin", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_payment_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let payment = PaymentService::new(&state.db).get_by_id(&caller, id).await?;

    Ok(payment_response(StatusCode::OK, payment))
}

/// Update a payment.
///
/// Payer and booking cannot be changed.
///
/// # Access Control
/// - The payer, or an admin
#[utoipa::path(
    put,
    path = "/api/payments/{id}",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment id")),
    request_body = UpdatePaymentDto,
    responses(
        (status = 200, description = "Updated payment", body = PaymentResponseDto),
        (status = 400, description = "Invalid field", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the payer or an admin", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let payment = PaymentService::new(&state.db)
        .update(&caller, id, payload)
        .await?;

    Ok(payment_response(StatusCode::OK, payment))
}

/// Soft-delete a payment.
///
/// # Access Control
/// - The payer, or an admin
#[utoipa::path(
    delete,
    path = "/api/payments/{id}",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment id")),
    responses(
        (status = 200, description = "Payment deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the payer or an admin", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    PaymentService::new(&state.db).delete(&caller, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Payment deleted"))))
}
