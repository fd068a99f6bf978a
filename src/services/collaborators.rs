//! Seams to the systems this service depends on but does not implement.
//!
//! Everything that talks to S3, Postgres or a language model sits behind one of these
//! traits so the quiz, hint and submission logic can be driven by in-memory fakes.

use async_trait::async_trait;
use thiserror::Error;
use time::PrimitiveDateTime;

#[derive(Debug, Error)]
pub(crate) enum GenerationError {
    #[error("text generation request failed: {0}")]
    Request(String),
    #[error("text generation returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("text generation returned an empty completion")]
    EmptyCompletion,
}

#[derive(Debug, Error)]
#[error("file transfer failed: {0}")]
pub(crate) struct TransferError(pub(crate) String);

#[derive(Debug, Error)]
#[error("persistence failed: {0}")]
pub(crate) struct PersistenceError(pub(crate) String);

#[async_trait]
pub(crate) trait TextGeneration: Send + Sync {
    async fn complete(
        &self,
        system_instruction: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, GenerationError>;
}

#[async_trait]
pub(crate) trait ObjectStorage: Send + Sync {
    /// Stores `bytes` under `name` and returns the location of the stored object.
    ///
    /// Implementations add their own uniqueness token to the key; two stores with the same
    /// name never overwrite each other.
    async fn store(
        &self,
        name: &str,
        bytes: Vec<u8>,
        mime_type: &str,
    ) -> Result<String, TransferError>;

    /// A short-lived URL a browser can open for `location`, when the backend supports one.
    async fn view_url(&self, _location: &str) -> Result<Option<String>, TransferError> {
        Ok(None)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct NewSubmission {
    pub(crate) owner_id: String,
    pub(crate) activity_name: String,
    pub(crate) external_file_location: String,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SubmissionRecord {
    pub(crate) id: String,
    pub(crate) owner_id: String,
    pub(crate) activity_name: String,
    pub(crate) external_file_location: String,
    pub(crate) created_at: PrimitiveDateTime,
}

#[async_trait]
pub(crate) trait SubmissionStore: Send + Sync {
    async fn insert(&self, submission: NewSubmission) -> Result<SubmissionRecord, PersistenceError>;
}
