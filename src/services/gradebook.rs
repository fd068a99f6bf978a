use std::sync::Arc;

use crate::repositories::submissions::GradebookRow;
use crate::services::collaborators::ObjectStorage;
use crate::services::search::matches_query;

#[derive(Debug, Clone)]
pub(crate) struct GradebookEntry {
    pub(crate) row: GradebookRow,
    pub(crate) view_url: Option<String>,
}

/// Rows whose student name or activity name matches `query`.
pub(crate) fn filter_rows(rows: Vec<GradebookRow>, query: Option<&str>) -> Vec<GradebookRow> {
    rows.into_iter()
        .filter(|row| {
            matches_query(&row.student_name, query) || matches_query(&row.activity_name, query)
        })
        .collect()
}

/// Attaches a viewable link to each row. A link that cannot be produced is left out.
pub(crate) async fn with_view_urls(
    rows: Vec<GradebookRow>,
    storage: Option<&Arc<dyn ObjectStorage>>,
) -> Vec<GradebookEntry> {
    let mut entries = Vec::with_capacity(rows.len());

    for row in rows {
        let view_url = match storage {
            Some(storage) => match storage.view_url(&row.file_location).await {
                Ok(url) => url,
                Err(err) => {
                    tracing::warn!(
                        submission_id = %row.id,
                        error = %err,
                        "Failed to build submission view URL"
                    );
                    None
                }
            },
            None => None,
        };
        entries.push(GradebookEntry { row, view_url });
    }

    entries
}
