use sqlx::PgPool;

use crate::db::models::LessonProgress;

const COLUMNS: &str = "id, user_id, lesson_id, completed_at";

pub(crate) async fn find_for_user_lesson(
    pool: &PgPool,
    user_id: &str,
    lesson_id: &str,
) -> Result<Option<LessonProgress>, sqlx::Error> {
    sqlx::query_as::<_, LessonProgress>(&format!(
        "SELECT {COLUMNS} FROM lesson_progress WHERE user_id = $1 AND lesson_id = $2"
    ))
    .bind(user_id)
    .bind(lesson_id)
    .fetch_optional(pool)
    .await
}

/// Marks a lesson complete. A repeated call keeps the first completion time.
pub(crate) async fn mark_complete(
    pool: &PgPool,
    id: &str,
    user_id: &str,
    lesson_id: &str,
    completed_at: time::PrimitiveDateTime,
) -> Result<LessonProgress, sqlx::Error> {
    sqlx::query(
        "INSERT INTO lesson_progress (id, user_id, lesson_id, completed_at)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (user_id, lesson_id) DO NOTHING",
    )
    .bind(id)
    .bind(user_id)
    .bind(lesson_id)
    .bind(completed_at)
    .execute(pool)
    .await?;

    sqlx::query_as::<_, LessonProgress>(&format!(
        "SELECT {COLUMNS} FROM lesson_progress WHERE user_id = $1 AND lesson_id = $2"
    ))
    .bind(user_id)
    .bind(lesson_id)
    .fetch_one(pool)
    .await
}

pub(crate) async fn list_completed_lesson_ids(
    pool: &PgPool,
    user_id: &str,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT lesson_id FROM lesson_progress WHERE user_id = $1")
        .bind(user_id)
        .fetch_all(pool)
        .await
}
