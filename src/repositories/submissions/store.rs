use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::services::collaborators::{
    NewSubmission, PersistenceError, SubmissionRecord, SubmissionStore,
};

/// [`SubmissionStore`] backed by the `submissions` table.
#[derive(Debug, Clone)]
pub(crate) struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn insert(
        &self,
        submission: NewSubmission,
    ) -> Result<SubmissionRecord, PersistenceError> {
        let row = super::insert(
            &self.pool,
            &Uuid::new_v4().to_string(),
            &submission.owner_id,
            &submission.activity_name,
            &submission.external_file_location,
            submission.created_at,
        )
        .await
        .map_err(|err| PersistenceError(err.to_string()))?;

        Ok(SubmissionRecord {
            id: row.id,
            owner_id: row.user_id,
            activity_name: row.activity_name,
            external_file_location: row.file_location,
            created_at: row.created_at,
        })
    }
}
