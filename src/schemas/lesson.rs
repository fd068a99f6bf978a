use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::{Lesson, LessonProgress};

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct LessonCreate {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub(crate) title: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub(crate) content: String,
    /// RFC 3339 timestamp.
    #[serde(default)]
    #[serde(alias = "dueDate")]
    pub(crate) due_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LessonResponse {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) due_date: Option<String>,
    pub(crate) created_at: String,
}

impl LessonResponse {
    pub(crate) fn from_db(lesson: Lesson) -> Self {
        Self {
            id: lesson.id,
            title: lesson.title,
            content: lesson.content,
            due_date: lesson.due_date.map(format_primitive),
            created_at: format_primitive(lesson.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ProgressResponse {
    pub(crate) lesson_id: String,
    pub(crate) completed: bool,
    pub(crate) completed_at: Option<String>,
}

impl ProgressResponse {
    pub(crate) fn from_db(lesson_id: String, progress: Option<LessonProgress>) -> Self {
        Self {
            lesson_id,
            completed: progress.is_some(),
            completed_at: progress.map(|progress| format_primitive(progress.completed_at)),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct TutorRequest {
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub(crate) question: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct TutorResponse {
    pub(crate) answer: String,
}
