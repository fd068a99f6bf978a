use sqlx::types::Json;
use sqlx::PgPool;

use crate::db::models::QuizRow;
use crate::services::quiz_engine::Question;

const COLUMNS: &str = "id, lesson_id, title, questions, created_at";

pub(crate) struct CreateQuiz<'a> {
    pub(crate) id: &'a str,
    pub(crate) lesson_id: Option<&'a str>,
    pub(crate) title: &'a str,
    pub(crate) questions: &'a [Question],
    pub(crate) created_at: time::PrimitiveDateTime,
}

pub(crate) async fn create(pool: &PgPool, params: CreateQuiz<'_>) -> Result<QuizRow, sqlx::Error> {
    sqlx::query_as::<_, QuizRow>(&format!(
        "INSERT INTO quizzes (id, lesson_id, title, questions, created_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {COLUMNS}"
    ))
    .bind(params.id)
    .bind(params.lesson_id)
    .bind(params.title)
    .bind(Json(params.questions))
    .bind(params.created_at)
    .fetch_one(pool)
    .await
}

pub(crate) async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<QuizRow>, sqlx::Error> {
    sqlx::query_as::<_, QuizRow>(&format!("SELECT {COLUMNS} FROM quizzes WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub(crate) async fn list(pool: &PgPool) -> Result<Vec<QuizRow>, sqlx::Error> {
    sqlx::query_as::<_, QuizRow>(&format!(
        "SELECT {COLUMNS} FROM quizzes ORDER BY created_at DESC, id"
    ))
    .fetch_all(pool)
    .await
}
