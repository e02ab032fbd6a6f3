use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        draft::{
            CreateEmptyDraftDto, DraftListDto, DraftMediaDto, DraftResponseDto,
            GetOrCreateDraftDto, PublishDraftDto, UpdateDraftDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::draft::{DraftReviewFilter, PropertyDraft},
        service::draft::{DraftService, PublishOutcome},
        state::AppState,
    },
};

/// Tag for grouping draft endpoints in OpenAPI documentation
pub static DRAFT_TAG: &str = "draft";

fn service(state: &AppState) -> DraftService<'_> {
    DraftService::new(&state.db, &state.media, state.media_cleanup_on_publish)
}

fn draft_response(draft: PropertyDraft) -> Json<DraftResponseDto> {
    Json(DraftResponseDto {
        success: true,
        draft: draft.into_dto(),
    })
}

fn publish_response(outcome: PublishOutcome) -> Json<PublishDraftDto> {
    Json(PublishDraftDto {
        success: true,
        property_id: outcome.property.id,
        property: outcome.property.into_dto(),
        warnings: outcome.warnings,
    })
}

fn get_or_create_status(is_new: bool) -> StatusCode {
    if is_new {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    }
}

/// Get the caller's draft of a property, creating one if none exists.
///
/// # Access Control
/// - The property's host, or an admin, when a draft has to be created
///
/// # Returns
/// - `200 OK` - Existing draft
/// - `201 Created` - New draft
/// - `403 Forbidden` - Caller may not manage the property
/// - `404 Not Found` - Property not found
#[utoipa::path(
    get,
    path = "/api/drafts/property/{id}",
    tag = DRAFT_TAG,
    params(("id" = i32, Path, description = "Property id")),
    responses(
        (status = 200, description = "Existing draft of the property", body = GetOrCreateDraftDto),
        (status = 201, description = "New draft of the property", body = GetOrCreateDraftDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the host or an admin", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_or_create_draft(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(property_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let result = service(&state)
        .get_or_create_for_property(&caller, property_id)
        .await?;

    Ok((
        get_or_create_status(result.is_new),
        Json(GetOrCreateDraftDto {
            success: true,
            draft: result.draft.into_dto(),
            is_new: result.is_new,
        }),
    ))
}

/// Merge fields into a draft's content.
///
/// The path id is the draft id. The body wraps host-writable property fields in
/// `draft_data`; any other top-level key is rejected.
///
/// # Access Control
/// - The draft's owner
#[utoipa::path(
    put,
    path = "/api/drafts/property/{id}",
    tag = DRAFT_TAG,
    params(("id" = i32, Path, description = "Draft id")),
    request_body = UpdateDraftDto,
    responses(
        (status = 200, description = "Updated draft", body = DraftResponseDto),
        (status = 422, description = "Body is not wrapped in draft_data"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Draft not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_draft(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDraftDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let draft = service(&state)
        .update(&caller, id, payload.draft_data)
        .await?;

    Ok((StatusCode::OK, draft_response(draft)))
}

/// Create a draft that is not linked to any property.
#[utoipa::path(
    post,
    path = "/api/drafts/property/empty",
    tag = DRAFT_TAG,
    request_body = CreateEmptyDraftDto,
    responses(
        (status = 201, description = "Created draft", body = DraftResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_empty_draft(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateEmptyDraftDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let draft = service(&state)
        .create_empty(&caller, payload.draft_data)
        .await?;

    Ok((StatusCode::CREATED, draft_response(draft)))
}

/// Create a new draft holding a snapshot of a property.
///
/// # Access Control
/// - The property's host, or an admin
#[utoipa::path(
    post,
    path = "/api/drafts/property/from-property/{id}",
    tag = DRAFT_TAG,
    params(("id" = i32, Path, description = "Property id")),
    responses(
        (status = 201, description = "Created draft", body = DraftResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the host or an admin", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_draft_from_property(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(property_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let draft = service(&state)
        .create_from_property(&caller, property_id)
        .await?;

    Ok((StatusCode::CREATED, draft_response(draft)))
}

/// Publish a draft to the property it was created from.
///
/// The property is updated first. Deleting the draft and any enabled media cleanup
/// follow; their failures are listed in `warnings` rather than failing the request.
///
/// # Access Control
/// - The draft's owner, who must also manage the property
#[utoipa::path(
    post,
    path = "/api/drafts/property/{id}/save-to-property",
    tag = DRAFT_TAG,
    params(("id" = i32, Path, description = "Draft id")),
    responses(
        (status = 200, description = "Property updated", body = PublishDraftDto),
        (status = 400, description = "Draft unlinked or content invalid", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Draft or property not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn publish_draft(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = service(&state).publish_to_existing(&caller, id).await?;

    Ok((StatusCode::OK, publish_response(outcome)))
}

/// Publish a draft as a new property hosted by the caller.
///
/// # Access Control
/// - `Host` - The draft's owner, who must be a host or an admin
#[utoipa::path(
    post,
    path = "/api/drafts/property/{id}/save-to-new-property",
    tag = DRAFT_TAG,
    params(("id" = i32, Path, description = "Draft id")),
    responses(
        (status = 201, description = "Property created", body = PublishDraftDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner or not a host", body = ErrorDto),
        (status = 404, description = "Draft not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn publish_draft_as_new(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Host])
        .await?;

    let outcome = service(&state).publish_to_new(&caller, id).await?;

    Ok((StatusCode::CREATED, publish_response(outcome)))
}

/// Reset a draft to the current state of its property. The draft is kept.
///
/// # Access Control
/// - The draft's owner
#[utoipa::path(
    post,
    path = "/api/drafts/property/{id}/discard",
    tag = DRAFT_TAG,
    params(("id" = i32, Path, description = "Draft id")),
    responses(
        (status = 200, description = "Draft reset", body = DraftResponseDto),
        (status = 400, description = "Draft is not linked to a property", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Draft or property not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn discard_draft(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let draft = service(&state).discard(&caller, id).await?;

    Ok((StatusCode::OK, draft_response(draft)))
}

#[utoipa::path(
    get,
    path = "/api/drafts/{id}",
    tag = DRAFT_TAG,
    params(("id" = i32, Path, description = "Draft id")),
    responses(
        (status = 200, description = "Draft", body = DraftResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Draft not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_draft_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let draft = service(&state).get_by_id(&caller, id).await?;

    Ok((StatusCode::OK, draft_response(draft)))
}

/// Add a photo or video URL to a draft. Files on disk are not touched.
#[utoipa::path(
    post,
    path = "/api/drafts/{id}/media",
    tag = DRAFT_TAG,
    params(("id" = i32, Path, description = "Draft id")),
    request_body = DraftMediaDto,
    responses(
        (status = 200, description = "Updated draft", body = DraftResponseDto),
        (status = 400, description = "Type is not image or video", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Draft not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_draft_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<DraftMediaDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let draft = service(&state).add_media(&caller, id, payload).await?;

    Ok((StatusCode::OK, draft_response(draft)))
}

/// Remove every photo or video with the given URL from a draft.
#[utoipa::path(
    delete,
    path = "/api/drafts/{id}/media",
    tag = DRAFT_TAG,
    params(("id" = i32, Path, description = "Draft id")),
    request_body = DraftMediaDto,
    responses(
        (status = 200, description = "Updated draft", body = DraftResponseDto),
        (status = 400, description = "Type is not image or video", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Draft not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn remove_draft_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<DraftMediaDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let draft = service(&state).remove_media(&caller, id, payload).await?;

    Ok((StatusCode::OK, draft_response(draft)))
}

#[utoipa::path(
    post,
    path = "/api/drafts/{id}/submit-review",
    tag = DRAFT_TAG,
    params(("id" = i32, Path, description = "Draft id")),
    responses(
        (status = 200, description = "Draft submitted for review", body = DraftResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Draft not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn submit_draft_for_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let draft = service(&state).submit_for_review(&caller, id).await?;

    Ok((StatusCode::OK, draft_response(draft)))
}

async fn list_drafts(
    state: AppState,
    headers: HeaderMap,
    filter: DraftReviewFilter,
) -> Result<(StatusCode, Json<DraftListDto>), AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let drafts = service(&state).list_by_owner(&caller, filter).await?;

    Ok((
        StatusCode::OK,
        Json(DraftListDto {
            success: true,
            drafts: drafts.into_iter().map(PropertyDraft::into_dto).collect(),
        }),
    ))
}

/// List every draft of the caller, newest first.
#[utoipa::path(
    get,
    path = "/api/drafts/user/all",
    tag = DRAFT_TAG,
    responses(
        (status = 200, description = "Drafts of the caller", body = DraftListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_my_drafts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    list_drafts(state, headers, DraftReviewFilter::All).await
}

/// List the caller's drafts that have not been submitted for review.
#[utoipa::path(
    get,
    path = "/api/drafts/user/not-in-review",
    tag = DRAFT_TAG,
    responses(
        (status = 200, description = "Drafts not in review", body = DraftListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_my_drafts_not_in_review(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    list_drafts(state, headers, DraftReviewFilter::NotInReview).await
}

/// List the caller's drafts submitted for review.
#[utoipa::path(
    get,
    path = "/api/drafts/user/in-review",
    tag = DRAFT_TAG,
    responses(
        (status = 200, description = "Drafts in review", body = DraftListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_my_drafts_in_review(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    list_drafts(state, headers, DraftReviewFilter::InReview).await
}
