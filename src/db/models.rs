use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use time::PrimitiveDateTime;

use crate::db::types::UserRole;
use crate::services::quiz_engine::{Question, Quiz, QuizError};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Profile {
    pub(crate) id: String,
    pub(crate) full_name: String,
    pub(crate) role: UserRole,
    pub(crate) email: Option<String>,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Lesson {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) due_date: Option<PrimitiveDateTime>,
    pub(crate) created_by: Option<String>,
    pub(crate) created_at: PrimitiveDateTime,
}

/// A stored quiz row. Turn it into a [`Quiz`] before handing it to the engine.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct QuizRow {
    pub(crate) id: String,
    pub(crate) lesson_id: Option<String>,
    pub(crate) title: String,
    pub(crate) questions: Json<Vec<Question>>,
    pub(crate) created_at: PrimitiveDateTime,
}

impl QuizRow {
    pub(crate) fn into_quiz(self) -> Result<Quiz, QuizError> {
        Quiz::new(self.id, self.title, self.questions.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Submission {
    pub(crate) id: String,
    pub(crate) user_id: String,
    pub(crate) activity_name: String,
    pub(crate) file_location: String,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct LessonProgress {
    pub(crate) id: String,
    pub(crate) user_id: String,
    pub(crate) lesson_id: String,
    pub(crate) completed_at: PrimitiveDateTime,
}
