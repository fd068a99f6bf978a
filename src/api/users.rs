use axum::{routing::get, Json, Router};

use crate::api::guards::CurrentUser;
use crate::core::state::AppState;
use crate::schemas::user::ProfileResponse;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

async fn me(CurrentUser(profile): CurrentUser) -> Json<ProfileResponse> {
    Json(ProfileResponse::from_db(profile))
}
