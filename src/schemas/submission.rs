use serde::{Deserialize, Serialize};

use crate::core::time::format_primitive;
use crate::services::collaborators::SubmissionRecord;
use crate::services::gradebook::GradebookEntry;

#[derive(Debug, Serialize)]
pub(crate) struct SubmissionResponse {
    pub(crate) id: String,
    pub(crate) user_id: String,
    pub(crate) activity_name: String,
    pub(crate) file_location: String,
    pub(crate) created_at: String,
}

impl SubmissionResponse {
    pub(crate) fn from_record(record: SubmissionRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.owner_id,
            activity_name: record.activity_name,
            file_location: record.external_file_location,
            created_at: format_primitive(record.created_at),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PreviewNameQuery {
    #[serde(alias = "activityName")]
    pub(crate) activity_name: String,
    #[serde(alias = "fileName")]
    pub(crate) file_name: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct PreviewNameResponse {
    pub(crate) file_name: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GradebookEntryResponse {
    pub(crate) id: String,
    pub(crate) user_id: String,
    pub(crate) student_name: String,
    pub(crate) activity_name: String,
    pub(crate) file_location: String,
    pub(crate) view_url: Option<String>,
    pub(crate) created_at: String,
}

impl GradebookEntryResponse {
    pub(crate) fn from_entry(entry: GradebookEntry) -> Self {
        let GradebookEntry { row, view_url } = entry;
        Self {
            id: row.id,
            user_id: row.user_id,
            student_name: row.student_name,
            activity_name: row.activity_name,
            file_location: row.file_location,
            view_url,
            created_at: format_primitive(row.created_at),
        }
    }
}
