use axum::{
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        media::UploadedFileDto,
    },
    server::{
        error::{media::MediaError, AppError},
        middleware::auth::AuthGuard,
        model::media::MediaKind,
        state::AppState,
        storage::url_for,
    },
};

/// Tag for grouping file endpoints in OpenAPI documentation
pub static FILE_TAG: &str = "file";

/// Multipart field carrying the uploaded file.
const FILE_FIELD: &str = "file";

struct Upload {
    original_name: Option<String>,
    content_type: String,
    bytes: Vec<u8>,
}

/// Reads the `file` field of a multipart body, ignoring any other field.
async fn read_upload(mut multipart: Multipart) -> Result<Upload, MediaError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| MediaError::Multipart(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let original_name = field.file_name().map(str::to_string);
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| MediaError::Multipart(e.to_string()))?;

        return Ok(Upload {
            original_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    Err(MediaError::MissingFile)
}

/// Upload a file into a media folder.
///
/// Stored under a fresh UUID name keeping the original extension. Uploads to `temp`
/// are purged after an hour unless confirmed.
///
/// # Access Control
/// - Any active, authenticated user
///
/// # Returns
/// - `201 Created` - Stored file name and public URL
/// - `400 Bad Request` - Missing file, disallowed type or too large
#[utoipa::path(
    post,
    path = "/api/files/upload/{kind}",
    tag = FILE_TAG,
    params(("kind" = MediaKind, Path, description = "photo, video, pdf or temp")),
    request_body(content_type = "multipart/form-data", description = "Form with a `file` field"),
    responses(
        (status = 201, description = "File stored", body = UploadedFileDto),
        (status = 400, description = "Missing file, disallowed type or too large", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(kind): Path<MediaKind>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let upload = read_upload(multipart).await?;
    let file_name = state
        .media
        .save(
            kind,
            upload.original_name.as_deref(),
            &upload.content_type,
            &upload.bytes,
        )
        .await?;

    tracing::info!("User {} uploaded {}/{}", caller.id, kind.folder(), file_name);

    Ok((
        StatusCode::CREATED,
        Json(UploadedFileDto {
            success: true,
            url: url_for(kind, &file_name),
            file_name,
        }),
    ))
}

/// Move a temp upload into a permanent media folder.
#[utoipa::path(
    post,
    path = "/api/files/confirm/{kind}/{file_name}",
    tag = FILE_TAG,
    params(
        ("kind" = MediaKind, Path, description = "photo, video or pdf"),
        ("file_name" = String, Path, description = "Name returned by the temp upload")
    ),
    responses(
        (status = 200, description = "File moved", body = UploadedFileDto),
        (status = 400, description = "Invalid name or target folder", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Temp file not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn confirm_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((kind, file_name)): Path<(MediaKind, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    state.media.confirm(&file_name, kind).await?;

    Ok((
        StatusCode::OK,
        Json(UploadedFileDto {
            success: true,
            url: url_for(kind, &file_name),
            file_name,
        }),
    ))
}

/// Delete a stored file.
#[utoipa::path(
    delete,
    path = "/api/files/{kind}/{file_name}",
    tag = FILE_TAG,
    params(
        ("kind" = MediaKind, Path, description = "photo, video, pdf or temp"),
        ("file_name" = String, Path, description = "Stored file name")
    ),
    responses(
        (status = 200, description = "File deleted", body = MessageDto),
        (status = 400, description = "Invalid file name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "File not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((kind, file_name)): Path<(MediaKind, String)>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    state.media.delete(kind, &file_name).await?;

    tracing::info!("User {} deleted {}/{}", caller.id, kind.folder(), file_name);

    Ok((StatusCode::OK, Json(MessageDto::new("File deleted"))))
}
