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
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::db::models::QuizRow;
use crate::repositories;
use crate::schemas::quiz::{
    AttemptRequest, AttemptResponse, HintRequest, HintResponse, QuizCreate, QuizResponse,
    QuizSummary,
};
use crate::services::quiz_engine::{self, Quiz};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_quizzes).post(create_quiz))
        .route("/:quiz_id", get(get_quiz))
        .route("/:quiz_id/hint", post(request_hint))
        .route("/:quiz_id/attempts", post(grade_attempt))
}

async fn list_quizzes(
    CurrentUser(_profile): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<QuizSummary>>, ApiError> {
    let quizzes = repositories::quizzes::list(state.db())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to list quizzes"))?;
    Ok(Json(quizzes.iter().map(QuizSummary::from_db).collect()))
}

async fn create_quiz(
    CurrentTeacher(teacher): CurrentTeacher,
    State(state): State<AppState>,
    Json(payload): Json<QuizCreate>,
) -> Result<(StatusCode, Json<QuizResponse>), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;
    quiz_engine::validate_questions(&payload.questions)?;

    let lesson_id = payload.lesson_id.as_deref().map(str::trim).filter(|id| !id.is_empty());
    if let Some(lesson_id) = lesson_id {
        let exists = repositories::lessons::find_by_id(state.db(), lesson_id)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to load lesson"))?
            .is_some();
        if !exists {
            return Err(ApiError::NotFound("Lesson not found".to_string()));
        }
    }

    let row = repositories::quizzes::create(
        state.db(),
        repositories::quizzes::CreateQuiz {
            id: &Uuid::new_v4().to_string(),
            lesson_id,
            title: payload.title.trim(),
            questions: &payload.questions,
            created_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create quiz"))?;

    tracing::info!(
        quiz_id = %row.id,
        teacher_id = %teacher.id,
        questions = row.questions.0.len(),
        "Quiz created"
    );
    Ok((StatusCode::CREATED, Json(QuizResponse::from_db(row))))
}

async fn get_quiz(
    Path(quiz_id): Path<String>,
    CurrentUser(_profile): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<QuizResponse>, ApiError> {
    let row = fetch_quiz_row(&state, &quiz_id).await?;
    Ok(Json(QuizResponse::from_db(row)))
}

async fn request_hint(
    Path(quiz_id): Path<String>,
    CurrentUser(_profile): CurrentUser,
    State(state): State<AppState>,
    Json(payload): Json<HintRequest>,
) -> Result<Json<HintResponse>, ApiError> {
    let quiz = load_quiz(&state, &quiz_id).await?;
    let question = quiz
        .question(payload.question_index)
        .ok_or_else(|| ApiError::BadRequest("question_index is out of range".to_string()))?;

    let hint = state.hints().request_hint(&question.prompt).await;
    tracing::info!(
        quiz_id = %quiz.id(),
        question_index = payload.question_index,
        source = hint.source.as_str(),
        "Hint served"
    );

    Ok(Json(HintResponse { hint: hint.text, source: hint.source.as_str() }))
}

async fn grade_attempt(
    Path(quiz_id): Path<String>,
    CurrentUser(profile): CurrentUser,
    State(state): State<AppState>,
    Json(payload): Json<AttemptRequest>,
) -> Result<Json<AttemptResponse>, ApiError> {
    let quiz = load_quiz(&state, &quiz_id).await?;
    let review = quiz_engine::replay(&quiz, &payload.answers)?;

    tracing::info!(
        quiz_id = %quiz.id(),
        user_id = %profile.id,
        score = review.result.score,
        total = review.result.total,
        "Quiz attempt graded"
    );
    Ok(Json(AttemptResponse::from_review(quiz.id().to_string(), review)))
}

async fn fetch_quiz_row(state: &AppState, quiz_id: &str) -> Result<QuizRow, ApiError> {
    repositories::quizzes::find_by_id(state.db(), quiz_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load quiz"))?
        .ok_or_else(|| ApiError::NotFound("Quiz not found".to_string()))
}

async fn load_quiz(state: &AppState, quiz_id: &str) -> Result<Quiz, ApiError> {
    let row = fetch_quiz_row(state, quiz_id).await?;
    Ok(row.into_quiz()?)
}
