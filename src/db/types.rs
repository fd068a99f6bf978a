use serde::{Deserialize, Serialize};
use sqlx::Type;

/// Role chosen at sign-up. Serialized as `Teacher` / `Student`, stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub(crate) enum UserRole {
    Teacher,
    Student,
}

impl UserRole {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Teacher => "Teacher",
            Self::Student => "Student",
        }
    }
}
