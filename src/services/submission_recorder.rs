use std::sync::Arc;

use thiserror::Error;

use crate::core::time::primitive_now_utc;
use crate::services::collaborators::{
    NewSubmission, ObjectStorage, PersistenceError, SubmissionRecord, SubmissionStore,
    TransferError,
};
use crate::services::submission_naming::{canonical_name, extension_of};

#[derive(Debug, Clone)]
pub(crate) struct UploadedFile {
    pub(crate) name: String,
    pub(crate) bytes: Vec<u8>,
    pub(crate) mime_type: String,
}

#[derive(Debug, Clone)]
pub(crate) struct SubmissionRequest {
    pub(crate) owner_id: String,
    pub(crate) owner_display_name: String,
    pub(crate) activity_name: String,
    pub(crate) file: Option<UploadedFile>,
}

/// Where a submission stopped. Each step only runs after the previous one succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubmissionStage {
    Validating,
    Transferring,
    Recording,
}

impl SubmissionStage {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Validating => "validating",
            Self::Transferring => "transferring",
            Self::Recording => "recording",
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum SubmissionError {
    #[error("{0}")]
    Validation(&'static str),
    #[error(transparent)]
    Transfer(#[from] TransferError),
    /// The file was stored but no record points at it.
    #[error("{source}")]
    Persistence {
        #[source]
        source: PersistenceError,
        orphaned_location: String,
    },
}

impl SubmissionError {
    pub(crate) fn stage(&self) -> SubmissionStage {
        match self {
            Self::Validation(_) => SubmissionStage::Validating,
            Self::Transfer(_) => SubmissionStage::Transferring,
            Self::Persistence { .. } => SubmissionStage::Recording,
        }
    }
}

/// Validates a submission, stores the file under its canonical name and records it.
///
/// The two external writes are not atomic. When the record insert fails after the file was
/// stored, the object stays behind: it is logged with its location, counted in
/// `submission_orphaned_files_total` and returned in the error. Nothing is retried here;
/// a resubmission stores a fresh object under a new storage token.
#[derive(Clone)]
pub(crate) struct SubmissionRecorder {
    storage: Arc<dyn ObjectStorage>,
    store: Arc<dyn SubmissionStore>,
}

impl SubmissionRecorder {
    pub(crate) fn new(storage: Arc<dyn ObjectStorage>, store: Arc<dyn SubmissionStore>) -> Self {
        Self { storage, store }
    }

    pub(crate) async fn submit(
        &self,
        request: SubmissionRequest,
    ) -> Result<SubmissionRecord, SubmissionError> {
        let outcome = self.run(request).await;
        let label = match &outcome {
            Ok(_) => "recorded",
            Err(err) => err.stage().as_str(),
        };
        metrics::counter!("submissions_total", "outcome" => label).increment(1);
        outcome
    }

    async fn run(&self, request: SubmissionRequest) -> Result<SubmissionRecord, SubmissionError> {
        let SubmissionRequest { owner_id, owner_display_name, activity_name, file } = request;
        let file = validate(&owner_display_name, &activity_name, file)?;

        let name = canonical_name(&owner_display_name, &activity_name, extension_of(&file.name));
        let size = file.bytes.len();

        let location = self.storage.store(&name, file.bytes, &file.mime_type).await?;
        tracing::info!(
            owner_id = %owner_id,
            file_name = %name,
            size_bytes = size,
            location = %location,
            "Submission file stored"
        );

        let new_submission = NewSubmission {
            owner_id,
            activity_name,
            external_file_location: location.clone(),
            created_at: primitive_now_utc(),
        };

        match self.store.insert(new_submission).await {
            Ok(record) => {
                tracing::info!(
                    submission_id = %record.id,
                    owner_id = %record.owner_id,
                    "Submission recorded"
                );
                Ok(record)
            }
            Err(source) => {
                metrics::counter!("submission_orphaned_files_total").increment(1);
                tracing::error!(
                    error = %source,
                    location = %location,
                    "Submission record insert failed; stored file is orphaned"
                );
                Err(SubmissionError::Persistence { source, orphaned_location: location })
            }
        }
    }
}

fn validate(
    owner_display_name: &str,
    activity_name: &str,
    file: Option<UploadedFile>,
) -> Result<UploadedFile, SubmissionError> {
    if owner_display_name.trim().is_empty() {
        return Err(SubmissionError::Validation("display name is required"));
    }
    if activity_name.trim().is_empty() {
        return Err(SubmissionError::Validation("activity name is required"));
    }

    match file {
        Some(file) if !file.bytes.is_empty() && !file.name.trim().is_empty() => Ok(file),
        _ => Err(SubmissionError::Validation("a non-empty file is required")),
    }
}
