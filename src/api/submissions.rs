use axum::{
    extract::{DefaultBodyLimit, Multipart, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::api::errors::ApiError;
use crate::api::guards::CurrentUser;
use crate::api::validation::ensure_upload_size;
use crate::core::state::AppState;
use crate::schemas::submission::{PreviewNameQuery, PreviewNameResponse, SubmissionResponse};
use crate::services::submission_naming::{canonical_name, extension_of};
use crate::services::submission_recorder::{SubmissionRequest, UploadedFile};

const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub(crate) fn router(max_upload_bytes: u64) -> Router<AppState> {
    let body_limit = usize::try_from(max_upload_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/", post(create_submission))
        .route("/preview-name", get(preview_name))
        .layer(DefaultBodyLimit::max(body_limit))
}

async fn preview_name(
    Query(query): Query<PreviewNameQuery>,
    CurrentUser(profile): CurrentUser,
) -> Json<PreviewNameResponse> {
    let file_name =
        canonical_name(&profile.full_name, &query.activity_name, extension_of(&query.file_name));
    Json(PreviewNameResponse { file_name })
}

async fn create_submission(
    CurrentUser(profile): CurrentUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<SubmissionResponse>), ApiError> {
    let recorder = state.submission_recorder().ok_or_else(|| {
        ApiError::ServiceUnavailable("File storage is not configured".to_string())
    })?;

    let max_bytes = state.settings().storage().max_upload_bytes();
    let max_mb = state.settings().storage().max_upload_size_mb;
    let mut activity_name = String::new();
    let mut file: Option<UploadedFile> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::BadRequest("Invalid multipart data".to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "activity_name" => {
                activity_name = field
                    .text()
                    .await
                    .map_err(|_| ApiError::BadRequest("Invalid activity name".to_string()))?;
            }
            "file" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let mime_type =
                    field.content_type().unwrap_or("application/octet-stream").to_string();
                let mut bytes = Vec::new();
                while let Some(chunk) = field
                    .chunk()
                    .await
                    .map_err(|_| ApiError::BadRequest("Failed to read file".to_string()))?
                {
                    ensure_upload_size(bytes.len(), chunk.len(), max_bytes, max_mb)?;
                    bytes.extend_from_slice(&chunk);
                }
                file = Some(UploadedFile { name: file_name, bytes, mime_type });
            }
            _ => {}
        }
    }

    let record = recorder
        .submit(SubmissionRequest {
            owner_id: profile.id,
            owner_display_name: profile.full_name,
            activity_name,
            file,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(SubmissionResponse::from_record(record))))
}
