use serde::Serialize;

use crate::core::time::format_primitive;
use crate::db::models::Profile;
use crate::db::types::UserRole;

#[derive(Debug, Serialize)]
pub(crate) struct ProfileResponse {
    pub(crate) id: String,
    pub(crate) full_name: String,
    pub(crate) role: UserRole,
    pub(crate) email: Option<String>,
    pub(crate) created_at: String,
}

impl ProfileResponse {
    pub(crate) fn from_db(profile: Profile) -> Self {
        Self {
            id: profile.id,
            full_name: profile.full_name,
            role: profile.role,
            email: profile.email,
            created_at: format_primitive(profile.created_at),
        }
    }
}
