use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        booking::{BookingListDto, BookingResponseDto, CreateBookingDto, UpdateBookingDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// List active bookings visible to the caller.
///
/// Admins see every active booking; other users see those where they are guest or host.
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Active bookings", body = BookingListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let bookings = BookingService::new(&state.db).list(&caller).await?;

    Ok((
        StatusCode::OK,
        Json(BookingListDto {
            success: true,
            bookings: bookings.into_iter().map(|b| b.into_dto()).collect(),
        }),
    ))
}

/// Book a property as the caller.
///
/// The total price is computed from the property's nightly rate.
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingResponseDto),
        (status = 400, description = "Invalid dates or party size", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Property not found or inactive", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let booking = BookingService::new(&state.db)
        .create(&caller, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponseDto {
            success: true,
            booking: booking.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking", body = BookingResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the guest, host or an admin", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_booking_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let booking = BookingService::new(&state.db)
        .get_by_id(&caller, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(BookingResponseDto {
            success: true,
            booking: booking.into_dto(),
        }),
    ))
}

/// Change a booking's dates or party size. The price is recomputed.
#[utoipa::path(
    put,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking id")),
    request_body = UpdateBookingDto,
    responses(
        (status = 200, description = "Updated booking", body = BookingResponseDto),
        (status = 400, description = "Invalid dates or party size", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the guest, host or an admin", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let booking = BookingService::new(&state.db)
        .update(&caller, id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(BookingResponseDto {
            success: true,
            booking: booking.into_dto(),
        }),
    ))
}

/// Cancel a booking.
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking cancelled", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the guest, host or an admin", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    BookingService::new(&state.db).cancel(&caller, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Booking cancelled"))))
}
