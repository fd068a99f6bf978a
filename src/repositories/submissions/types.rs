use time::PrimitiveDateTime;

pub(crate) const COLUMNS: &str = "id, user_id, activity_name, file_location, created_at";

/// A submission joined with its owner's profile.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct GradebookRow {
    pub(crate) id: String,
    pub(crate) user_id: String,
    pub(crate) activity_name: String,
    pub(crate) file_location: String,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) student_name: String,
}
