use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::api::errors::ApiError;
use crate::api::guards::CurrentTeacher;
use crate::core::state::AppState;
use crate::repositories;
use crate::schemas::dashboard::SearchQuery;
use crate::schemas::submission::GradebookEntryResponse;
use crate::services::gradebook;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", get(list_entries))
}

async fn list_entries(
    Query(query): Query<SearchQuery>,
    CurrentTeacher(_teacher): CurrentTeacher,
    State(state): State<AppState>,
) -> Result<Json<Vec<GradebookEntryResponse>>, ApiError> {
    let rows = repositories::submissions::list_gradebook(state.db())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to list submissions"))?;

    let rows = gradebook::filter_rows(rows, query.q.as_deref());
    let entries = gradebook::with_view_urls(rows, state.storage()).await;

    Ok(Json(entries.into_iter().map(GradebookEntryResponse::from_entry).collect()))
}
