use sqlx::PgPool;

use super::types::GradebookRow;

/// Every submission with its owner's name, newest first.
pub(crate) async fn list_gradebook(pool: &PgPool) -> Result<Vec<GradebookRow>, sqlx::Error> {
    sqlx::query_as::<_, GradebookRow>(
        "SELECT s.id,
                s.user_id,
                s.activity_name,
                s.file_location,
                s.created_at,
                p.full_name AS student_name
         FROM submissions s
         JOIN profiles p ON p.id = s.user_id
         ORDER BY s.created_at DESC, s.id",
    )
    .fetch_all(pool)
    .await
}
