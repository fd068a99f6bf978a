use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::guards::{CurrentTeacher, CurrentUser};
use crate::api::validation::parse_due_date;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::db::models::Lesson;
use crate::repositories;
use crate::schemas::lesson::{
    LessonCreate, LessonResponse, ProgressResponse, TutorRequest, TutorResponse,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_lesson))
        .route("/:lesson_id", get(get_lesson))
        .route("/:lesson_id/progress", get(get_progress))
        .route("/:lesson_id/complete", post(complete_lesson))
        .route("/:lesson_id/tutor", post(ask_tutor))
}

async fn create_lesson(
    CurrentTeacher(teacher): CurrentTeacher,
    State(state): State<AppState>,
    Json(payload): Json<LessonCreate>,
) -> Result<(StatusCode, Json<LessonResponse>), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let due_date = parse_due_date(payload.due_date.as_deref())?;

    let lesson = repositories::lessons::create(
        state.db(),
        repositories::lessons::CreateLesson {
            id: &Uuid::new_v4().to_string(),
            title: payload.title.trim(),
            content: &payload.content,
            due_date,
            created_by: &teacher.id,
            created_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create lesson"))?;

    tracing::info!(lesson_id = %lesson.id, teacher_id = %teacher.id, "Lesson created");
    Ok((StatusCode::CREATED, Json(LessonResponse::from_db(lesson))))
}

async fn get_lesson(
    Path(lesson_id): Path<String>,
    CurrentUser(_profile): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<LessonResponse>, ApiError> {
    let lesson = fetch_lesson(&state, &lesson_id).await?;
    Ok(Json(LessonResponse::from_db(lesson)))
}

async fn get_progress(
    Path(lesson_id): Path<String>,
    CurrentUser(profile): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let lesson = fetch_lesson(&state, &lesson_id).await?;
    let progress =
        repositories::progress::find_for_user_lesson(state.db(), &profile.id, &lesson.id)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to load lesson progress"))?;

    Ok(Json(ProgressResponse::from_db(lesson.id, progress)))
}

async fn complete_lesson(
    Path(lesson_id): Path<String>,
    CurrentUser(profile): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let lesson = fetch_lesson(&state, &lesson_id).await?;
    let progress = repositories::progress::mark_complete(
        state.db(),
        &Uuid::new_v4().to_string(),
        &profile.id,
        &lesson.id,
        primitive_now_utc(),
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to record lesson progress"))?;

    tracing::info!(lesson_id = %lesson.id, user_id = %profile.id, "Lesson completed");
    Ok(Json(ProgressResponse::from_db(lesson.id, Some(progress))))
}

async fn ask_tutor(
    Path(lesson_id): Path<String>,
    CurrentUser(_profile): CurrentUser,
    State(state): State<AppState>,
    Json(payload): Json<TutorRequest>,
) -> Result<Json<TutorResponse>, ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let lesson = fetch_lesson(&state, &lesson_id).await?;

    let answer = state.tutor().explain(&lesson.content, payload.question.trim()).await;
    Ok(Json(TutorResponse { answer }))
}

async fn fetch_lesson(state: &AppState, lesson_id: &str) -> Result<Lesson, ApiError> {
    repositories::lessons::find_by_id(state.db(), lesson_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load lesson"))?
        .ok_or_else(|| ApiError::NotFound("Lesson not found".to_string()))
}
