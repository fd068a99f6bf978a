use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::api::errors::ApiError;
use crate::api::guards::CurrentUser;
use crate::core::state::AppState;
use crate::repositories;
use crate::schemas::dashboard::{DashboardResponse, SearchQuery};
use crate::schemas::lesson::LessonResponse;
use crate::schemas::quiz::QuizSummary;
use crate::services::dashboard;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", get(show))
}

async fn show(
    Query(query): Query<SearchQuery>,
    CurrentUser(profile): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let lessons = repositories::lessons::list(state.db())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to list lessons"))?;
    let quizzes = repositories::quizzes::list(state.db())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to list quizzes"))?;
    let completed = repositories::progress::list_completed_lesson_ids(state.db(), &profile.id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load lesson progress"))?;

    let stats = dashboard::stats(&lessons, &completed, quizzes.len());
    let lessons = dashboard::filter_lessons(lessons, query.q.as_deref());

    Ok(Json(DashboardResponse {
        lessons: lessons.into_iter().map(LessonResponse::from_db).collect(),
        quizzes: quizzes.iter().map(QuizSummary::from_db).collect(),
        stats,
    }))
}
