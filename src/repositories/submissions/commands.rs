use sqlx::PgPool;

use crate::db::models::Submission;

use super::types::COLUMNS;

pub(crate) async fn insert(
    pool: &PgPool,
    id: &str,
    user_id: &str,
    activity_name: &str,
    file_location: &str,
    created_at: time::PrimitiveDateTime,
) -> Result<Submission, sqlx::Error> {
    sqlx::query_as::<_, Submission>(&format!(
        "INSERT INTO submissions (id, user_id, activity_name, file_location, created_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(user_id)
    .bind(activity_name)
    .bind(file_location)
    .bind(created_at)
    .fetch_one(pool)
    .await
}
