use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, PaginationParams},
        property::{
            CreateReviewDto, PaginatedPropertiesDto, PropertyFields, PropertyResponseDto,
            ReviewListDto, ReviewResponseDto, SetApprovalDto, UpdateReviewDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::property::{ModerationParams, Property},
        service::{property::PropertyService, review::ReviewService},
        state::AppState,
    },
};

/// Tag for grouping property endpoints in OpenAPI documentation
pub static PROPERTY_TAG: &str = "property";

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

fn property_response(property: Property) -> Json<PropertyResponseDto> {
    Json(PropertyResponseDto {
        success: true,
        property: property.into_dto(),
    })
}

/// List active properties, newest first.
#[utoipa::path(
    get,
    path = "/api/properties",
    tag = PROPERTY_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of active properties", body = PaginatedPropertiesDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_properties(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let properties = PropertyService::new(&state.db)
        .get_active_paginated(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(properties.into_dto())))
}

/// Create a property hosted by the caller.
///
/// # Access Control
/// - `Host` - Hosts and admins
///
/// # Returns
/// - `201 Created` - Created property
/// - `400 Bad Request` - Missing required field or value out of range
#[utoipa::path(
    post,
    path = "/api/properties",
    tag = PROPERTY_TAG,
    request_body = PropertyFields,
    responses(
        (status = 201, description = "Created property", body = PropertyResponseDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a host", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_property(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PropertyFields>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Host])
        .await?;

    let property = PropertyService::new(&state.db)
        .create(&caller, payload)
        .await?;

    Ok((StatusCode::CREATED, property_response(property)))
}

#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Property id")),
    responses(
        (status = 200, description = "Property", body = PropertyResponseDto),
        (status = 404, description = "Property not found", body = ErrorDto)
    ),
)]
pub async fn get_property_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let property = PropertyService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, property_response(property)))
}

/// Update a property.
///
/// Only host-writable fields can be supplied. Identity, moderation flags and reviews
/// have their own endpoints.
///
/// # Access Control
/// - The property's host, or an admin
#[utoipa::path(
    put,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Property id")),
    request_body = PropertyFields,
    responses(
        (status = 200, description = "Updated property", body = PropertyResponseDto),
        (status = 400, description = "Invalid field", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the host or an admin", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_property(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<PropertyFields>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let property = PropertyService::new(&state.db)
        .update(&caller, id, payload)
        .await?;

    Ok((StatusCode::OK, property_response(property)))
}

/// Deactivate a property. Properties are never hard-deleted.
///
/// # Access Control
/// - The property's host, or an admin
#[utoipa::path(
    delete,
    path = "/api/properties/{id}",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Property id")),
    responses(
        (status = 200, description = "Property deactivated", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the host or an admin", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn deactivate_property(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    PropertyService::new(&state.db).deactivate(&caller, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Property deactivated"))))
}

/// Approve a property or mark its documents as verified.
///
/// Omitted flags keep their stored value. Hosts cannot set these flags through the
/// property or draft update bodies.
///
/// # Access Control
/// - `Admin` - Only admins moderate listings
#[utoipa::path(
    put,
    path = "/api/properties/{id}/approval",
    tag = PROPERTY_TAG,
    params(("id" = i32, Path, description = "Property id")),
    request_body = SetApprovalDto,
    responses(
        (status = 200, description = "Updated property", body = PropertyResponseDto),
        (status = 400, description = "No flag supplied", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn set_property_approval(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SetApprovalDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let property = PropertyService::new(&state.db)
        .moderate(ModerationParams {
            id,
            is_approved: payload.is_approved,
            is_proof_of_address_verified: payload.is_proof_of_address_verified,
            is_land_use_permit_verified: payload.is_land_use_permit_verified,
        })
        .await?;

    Ok((StatusCode::OK, property_response(property)))
}

#[utoipa::path(
    get,
    path = "/api/properties/{id}/reviews",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Property id")),
    responses(
        (status = 200, description = "Reviews of the property", body = ReviewListDto),
        (status = 404, description = "Property not found", body = ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db).list(id).await?;

    Ok((
        StatusCode::OK,
        Json(ReviewListDto {
            success: true,
            reviews,
        }),
    ))
}

/// Review a property as the caller.
///
/// # Access Control
/// - Any active, authenticated user
#[utoipa::path(
    post,
    path = "/api/properties/{id}/reviews",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Property id")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review added", body = ReviewResponseDto),
        (status = 400, description = "Invalid score, comment or booking", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let review = ReviewService::new(&state.db)
        .add(&caller, id, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReviewResponseDto {
            success: true,
            review,
        }),
    ))
}

/// Edit a review.
///
/// # Access Control
/// - The review's author
#[utoipa::path(
    put,
    path = "/api/properties/{id}/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Property id"),
        ("review_id" = String, Path, description = "Review id")
    ),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Updated review", body = ReviewResponseDto),
        (status = 400, description = "Invalid score or comment", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Property or review not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, review_id)): Path<(i32, String)>,
    Json(payload): Json<UpdateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let review = ReviewService::new(&state.db)
        .update(&caller, id, &review_id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ReviewResponseDto {
            success: true,
            review,
        }),
    ))
}

/// Delete a review.
///
/// # Access Control
/// - The review's author, or an admin
#[utoipa::path(
    delete,
    path = "/api/properties/{id}/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Property id"),
        ("review_id" = String, Path, description = "Review id")
    ),
    responses(
        (status = 200, description = "Review deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author or an admin", body = ErrorDto),
        (status = 404, description = "Property or review not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, review_id)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    ReviewService::new(&state.db)
        .delete(&caller, id, &review_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Review deleted"))))
}
