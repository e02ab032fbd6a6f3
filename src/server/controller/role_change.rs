use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        role_change::{
            ReviewRoleChangeDto, RoleChangeListDto, RoleChangeResponseDto, SubmitRoleChangeDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::role_change::RoleChangeService,
        state::AppState,
    },
};

/// Tag for grouping role-change endpoints in OpenAPI documentation
pub static ROLE_CHANGE_TAG: &str = "role-change";

/// List every role-change request, newest first.
///
/// # Access Control
/// - `Admin` - Only admins review applications
#[utoipa::path(
    get,
    path = "/api/role-change-requests",
    tag = ROLE_CHANGE_TAG,
    responses(
        (status = 200, description = "Requests", body = RoleChangeListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_role_change_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let requests = RoleChangeService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(RoleChangeListDto {
            success: true,
            requests: requests.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}

/// Apply to become a host.
///
/// # Access Control
/// - Any active, authenticated user who is not yet a host
#[utoipa::path(
    post,
    path = "/api/role-change-requests",
    tag = ROLE_CHANGE_TAG,
    request_body = SubmitRoleChangeDto,
    responses(
        (status = 201, description = "Request submitted", body = RoleChangeResponseDto),
        (status = 400, description = "Invalid request or one already pending", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn submit_role_change_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SubmitRoleChangeDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let request = RoleChangeService::new(&state.db)
        .submit(&caller, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RoleChangeResponseDto {
            success: true,
            request: request.into_dto(),
        }),
    ))
}

/// Review a role-change request. Approval promotes the user.
///
/// # Access Control
/// - `Admin` - Only admins review applications
#[utoipa::path(
    put,
    path = "/api/role-change-requests/{id}",
    tag = ROLE_CHANGE_TAG,
    params(("id" = i32, Path, description = "Request id")),
    request_body = ReviewRoleChangeDto,
    responses(
        (status = 200, description = "Reviewed request", body = RoleChangeResponseDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn review_role_change_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewRoleChangeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let request = RoleChangeService::new(&state.db)
        .review(id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(RoleChangeResponseDto {
            success: true,
            request: request.into_dto(),
        }),
    ))
}

/// Delete a role-change request.
///
/// # Access Control
/// - `Admin` - Only admins review applications
#[utoipa::path(
    delete,
    path = "/api/role-change-requests/{id}",
    tag = ROLE_CHANGE_TAG,
    params(("id" = i32, Path, description = "Request id")),
    responses(
        (status = 200, description = "Request deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_role_change_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    RoleChangeService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Request deleted"))))
}
