use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::QuizRow;
use crate::services::quiz_engine::{AttemptReview, Question, QuizResult};

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct QuizCreate {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub(crate) title: String,
    #[serde(default)]
    #[serde(alias = "lessonId")]
    pub(crate) lesson_id: Option<String>,
    pub(crate) questions: Vec<Question>,
}

/// A question as shown to students: the correct option stays on the server.
#[derive(Debug, Serialize)]
pub(crate) struct QuestionView {
    pub(crate) question: String,
    pub(crate) options: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuizResponse {
    pub(crate) id: String,
    pub(crate) lesson_id: Option<String>,
    pub(crate) title: String,
    pub(crate) questions: Vec<QuestionView>,
    pub(crate) created_at: String,
}

impl QuizResponse {
    pub(crate) fn from_db(row: QuizRow) -> Self {
        Self {
            id: row.id,
            lesson_id: row.lesson_id,
            title: row.title,
            questions: row
                .questions
                .0
                .into_iter()
                .map(|question| QuestionView {
                    question: question.prompt,
                    options: question.options,
                })
                .collect(),
            created_at: format_primitive(row.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct QuizSummary {
    pub(crate) id: String,
    pub(crate) lesson_id: Option<String>,
    pub(crate) title: String,
    pub(crate) question_count: usize,
    pub(crate) created_at: String,
}

impl QuizSummary {
    pub(crate) fn from_db(row: &QuizRow) -> Self {
        Self {
            id: row.id.clone(),
            lesson_id: row.lesson_id.clone(),
            title: row.title.clone(),
            question_count: row.questions.0.len(),
            created_at: format_primitive(row.created_at),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct HintRequest {
    #[serde(alias = "questionIndex")]
    pub(crate) question_index: usize,
}

#[derive(Debug, Serialize)]
pub(crate) struct HintResponse {
    pub(crate) hint: String,
    pub(crate) source: &'static str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AttemptRequest {
    pub(crate) answers: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AttemptResponse {
    pub(crate) quiz_id: String,
    #[serde(flatten)]
    pub(crate) result: QuizResult,
    pub(crate) correct: Vec<bool>,
}

impl AttemptResponse {
    pub(crate) fn from_review(quiz_id: String, review: AttemptReview) -> Self {
        Self { quiz_id, result: review.result, correct: review.outcomes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::primitive_now_utc;
    use sqlx::types::Json;

    #[test]
    fn quiz_response_hides_correct_answers() {
        let row = QuizRow {
            id: "quiz-1".to_string(),
            lesson_id: None,
            title: "Cells".to_string(),
            questions: Json(vec![Question {
                prompt: "Powerhouse of the cell?".to_string(),
                options: vec!["Nucleus".to_string(), "Mitochondria".to_string()],
                correct_option_index: 1,
            }]),
            created_at: primitive_now_utc(),
        };

        let value = serde_json::to_value(QuizResponse::from_db(row)).expect("json");
        assert_eq!(value["questions"][0]["question"], "Powerhouse of the cell?");
        assert!(value["questions"][0].get("correct_answer").is_none());
    }

    #[test]
    fn attempt_response_flattens_result() {
        let review = AttemptReview {
            result: QuizResult { score: 1, total: 2, percentage: 50 },
            outcomes: vec![true, false],
        };
        let value =
            serde_json::to_value(AttemptResponse::from_review("q".to_string(), review)).unwrap();
        assert_eq!(value["score"], 1);
        assert_eq!(value["percentage"], 50);
        assert_eq!(value["correct"], serde_json::json!([true, false]));
    }
}
