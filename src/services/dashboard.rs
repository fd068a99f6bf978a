use std::collections::HashSet;

use serde::Serialize;

use crate::db::models::Lesson;
use crate::services::search::matches_query;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct DashboardStats {
    pub(crate) total_lessons: usize,
    pub(crate) completed_lessons: usize,
    pub(crate) quizzes_available: usize,
}

/// Lessons whose title matches `query`, keeping the incoming (newest first) order.
pub(crate) fn filter_lessons(lessons: Vec<Lesson>, query: Option<&str>) -> Vec<Lesson> {
    lessons.into_iter().filter(|lesson| matches_query(&lesson.title, query)).collect()
}

/// Stats are computed over every lesson, not just the filtered view.
pub(crate) fn stats(
    lessons: &[Lesson],
    completed_lesson_ids: &[String],
    quizzes_available: usize,
) -> DashboardStats {
    let completed: HashSet<&str> = completed_lesson_ids.iter().map(String::as_str).collect();
    DashboardStats {
        total_lessons: lessons.len(),
        completed_lessons: lessons
            .iter()
            .filter(|lesson| completed.contains(lesson.id.as_str()))
            .count(),
        quizzes_available,
    }
}
