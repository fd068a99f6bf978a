use serde::{Deserialize, Serialize};

use crate::schemas::lesson::LessonResponse;
use crate::schemas::quiz::QuizSummary;
use crate::services::dashboard::DashboardStats;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    pub(crate) q: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DashboardResponse {
    pub(crate) lessons: Vec<LessonResponse>,
    pub(crate) quizzes: Vec<QuizSummary>,
    pub(crate) stats: DashboardStats,
}
