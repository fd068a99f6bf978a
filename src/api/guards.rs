use async_trait::async_trait;
use axum::extract::{FromRequestParts, State};
use axum::http::{header, request::Parts};

use crate::api::errors::ApiError;
use crate::core::security::{self, Claims};
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::db::models::Profile;
use crate::db::types::UserRole;
use crate::repositories;

pub(crate) struct CurrentUser(pub(crate) Profile);
pub(crate) struct CurrentTeacher(pub(crate) Profile);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let State(app_state) = State::<AppState>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to access application state"))?;

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthorized("Invalid authentication credentials"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized("Invalid authentication credentials"))?;

        let claims = security::verify_token(token, app_state.settings())
            .map_err(|_| ApiError::Unauthorized("Invalid authentication credentials"))?;

        let profile = repositories::profiles::find_by_id(app_state.db(), &claims.sub)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to load profile"))?;

        match profile {
            Some(profile) => Ok(CurrentUser(profile)),
            None => provision_profile(&app_state, claims).await.map(CurrentUser),
        }
    }
}

/// First request of a freshly signed-up identity: create the profile from token metadata.
async fn provision_profile(state: &AppState, claims: Claims) -> Result<Profile, ApiError> {
    let (Some(full_name), Some(role)) = (claims.full_name.as_deref(), claims.role) else {
        return Err(ApiError::Unauthorized("Profile not found"));
    };
    if full_name.trim().is_empty() {
        return Err(ApiError::Unauthorized("Profile not found"));
    }

    let profile = repositories::profiles::create_if_absent(
        state.db(),
        repositories::profiles::CreateProfile {
            id: &claims.sub,
            full_name: full_name.trim(),
            role,
            email: claims.email.as_deref(),
            created_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create profile"))?;

    tracing::info!(user_id = %profile.id, role = profile.role.as_str(), "Profile provisioned");
    Ok(profile)
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentTeacher {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(profile) = CurrentUser::from_request_parts(parts, state).await?;

        if profile.role == UserRole::Teacher {
            Ok(CurrentTeacher(profile))
        } else {
            Err(ApiError::Forbidden("Teacher access required"))
        }
    }
}
