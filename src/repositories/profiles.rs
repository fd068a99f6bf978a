use sqlx::PgPool;

use crate::db::models::Profile;
use crate::db::types::UserRole;

const COLUMNS: &str = "id, full_name, role, email, created_at";

pub(crate) async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(&format!("SELECT {COLUMNS} FROM profiles WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub(crate) struct CreateProfile<'a> {
    pub(crate) id: &'a str,
    pub(crate) full_name: &'a str,
    pub(crate) role: UserRole,
    pub(crate) email: Option<&'a str>,
    pub(crate) created_at: time::PrimitiveDateTime,
}

/// Inserts the profile unless one already exists for the id, then returns the stored row.
pub(crate) async fn create_if_absent(
    pool: &PgPool,
    params: CreateProfile<'_>,
) -> Result<Profile, sqlx::Error> {
    sqlx::query(
        "INSERT INTO profiles (id, full_name, role, email, created_at)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (id) DO NOTHING",
    )
    .bind(params.id)
    .bind(params.full_name)
    .bind(params.role)
    .bind(params.email)
    .bind(params.created_at)
    .execute(pool)
    .await?;

    sqlx::query_as::<_, Profile>(&format!("SELECT {COLUMNS} FROM profiles WHERE id = $1"))
        .bind(params.id)
        .fetch_one(pool)
        .await
}
