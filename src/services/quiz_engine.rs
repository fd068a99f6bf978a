//! Quiz-taking state machine.
//!
//! A [`QuizAttempt`] walks a validated [`Quiz`] one question at a time: pick an option,
//! advance, repeat until the last answer finishes the attempt. Attempts live only as long as
//! the caller holds them; nothing here is persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Question {
    #[serde(rename = "question")]
    pub(crate) prompt: String,
    pub(crate) options: Vec<String>,
    #[serde(rename = "correct_answer")]
    pub(crate) correct_option_index: usize,
}

/// A question set that passed [`Quiz::new`]; the engine never sees an unvalidated one.
#[derive(Debug, Clone)]
pub(crate) struct Quiz {
    id: String,
    title: String,
    questions: Vec<Question>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum QuizError {
    #[error("invalid quiz: {0}")]
    InvalidQuiz(String),
    #[error("precondition violated: {0}")]
    PreconditionViolation(&'static str),
    #[error("expected {expected} answers, got {actual}")]
    AnswerCount { expected: usize, actual: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AttemptState {
    InProgress { current_index: usize, selected_index: Option<usize> },
    Finished { last_index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct QuizResult {
    pub(crate) score: usize,
    pub(crate) total: usize,
    pub(crate) percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AttemptReview {
    pub(crate) result: QuizResult,
    pub(crate) outcomes: Vec<bool>,
}

#[derive(Debug)]
pub(crate) struct QuizAttempt<'q> {
    quiz: &'q Quiz,
    state: AttemptState,
    score_so_far: usize,
}

impl Quiz {
    pub(crate) fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, QuizError> {
        validate_questions(&questions)?;
        Ok(Self { id: id.into(), title: title.into(), questions })
    }

    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub(crate) fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub(crate) fn len(&self) -> usize {
        self.questions.len()
    }

    pub(crate) fn start(&self) -> QuizAttempt<'_> {
        QuizAttempt {
            quiz: self,
            state: AttemptState::InProgress { current_index: 0, selected_index: None },
            score_so_far: 0,
        }
    }
}

pub(crate) fn validate_questions(questions: &[Question]) -> Result<(), QuizError> {
    if questions.is_empty() {
        return Err(QuizError::InvalidQuiz("quiz has no questions".to_string()));
    }

    for (index, question) in questions.iter().enumerate() {
        let number = index + 1;
        if question.prompt.trim().is_empty() {
            return Err(QuizError::InvalidQuiz(format!("question {number} has an empty prompt")));
        }
        if question.options.len() < 2 {
            return Err(QuizError::InvalidQuiz(format!(
                "question {number} needs at least two options"
            )));
        }
        if question.correct_option_index >= question.options.len() {
            return Err(QuizError::InvalidQuiz(format!(
                "question {number} marks option {} correct but has only {}",
                question.correct_option_index,
                question.options.len()
            )));
        }
    }

    Ok(())
}

impl<'q> QuizAttempt<'q> {
    pub(crate) fn state(&self) -> AttemptState {
        self.state
    }

    pub(crate) fn current_index(&self) -> usize {
        match self.state {
            AttemptState::InProgress { current_index, .. } => current_index,
            AttemptState::Finished { last_index } => last_index,
        }
    }

    pub(crate) fn current_question(&self) -> &'q Question {
        &self.quiz.questions[self.current_index()]
    }

    pub(crate) fn selected_index(&self) -> Option<usize> {
        match self.state {
            AttemptState::InProgress { selected_index, .. } => selected_index,
            AttemptState::Finished { .. } => None,
        }
    }

    pub(crate) fn score_so_far(&self) -> usize {
        self.score_so_far
    }

    pub(crate) fn is_finished(&self) -> bool {
        matches!(self.state, AttemptState::Finished { .. })
    }

    pub(crate) fn select_answer(&mut self, option_index: usize) -> Result<(), QuizError> {
        let AttemptState::InProgress { current_index, .. } = self.state else {
            return Err(QuizError::PreconditionViolation("attempt is already finished"));
        };

        if option_index >= self.quiz.questions[current_index].options.len() {
            return Err(QuizError::PreconditionViolation("option index out of range"));
        }

        self.state =
            AttemptState::InProgress { current_index, selected_index: Some(option_index) };
        Ok(())
    }

    /// Scores the selected answer and moves on. Returns whether it was correct.
    pub(crate) fn advance(&mut self) -> Result<bool, QuizError> {
        let AttemptState::InProgress { current_index, selected_index } = self.state else {
            return Err(QuizError::PreconditionViolation("attempt is already finished"));
        };
        let Some(selected) = selected_index else {
            return Err(QuizError::PreconditionViolation("no answer selected"));
        };

        let correct = selected == self.quiz.questions[current_index].correct_option_index;
        if correct {
            self.score_so_far += 1;
        }

        self.state = if current_index + 1 == self.quiz.len() {
            AttemptState::Finished { last_index: current_index }
        } else {
            AttemptState::InProgress { current_index: current_index + 1, selected_index: None }
        };

        Ok(correct)
    }

    pub(crate) fn result(&self) -> Result<QuizResult, QuizError> {
        if !self.is_finished() {
            return Err(QuizError::PreconditionViolation("attempt is not finished"));
        }

        let total = self.quiz.len();
        Ok(QuizResult {
            score: self.score_so_far,
            total,
            percentage: percentage(self.score_so_far, total),
        })
    }
}

/// Drives a fresh attempt through a complete answer sheet, one answer per question.
pub(crate) fn replay(quiz: &Quiz, answers: &[usize]) -> Result<AttemptReview, QuizError> {
    if answers.len() != quiz.len() {
        return Err(QuizError::AnswerCount { expected: quiz.len(), actual: answers.len() });
    }

    let mut attempt = quiz.start();
    let mut outcomes = Vec::with_capacity(answers.len());
    for &answer in answers {
        attempt.select_answer(answer)?;
        outcomes.push(attempt.advance()?);
    }

    Ok(AttemptReview { result: attempt.result()?, outcomes })
}

/// Round-half-up of `100 * score / total` in integer arithmetic; `total` is never zero.
fn percentage(score: usize, total: usize) -> u32 {
    ((200 * score + total) / (2 * total)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(prompt: &str, correct: usize) -> Question {
        Question {
            prompt: prompt.to_string(),
            options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            correct_option_index: correct,
        }
    }

    fn three_question_quiz() -> Quiz {
        Quiz::new(
            "quiz-1",
            "Cells",
            vec![question("Powerhouse?", 0), question("Nucleus holds?", 1), question("Wall?", 2)],
        )
        .expect("valid quiz")
    }

    #[test]
    fn empty_quiz_is_rejected_at_load() {
        let err = Quiz::new("q", "Empty", Vec::new()).expect_err("empty");
        assert!(matches!(err, QuizError::InvalidQuiz(_)));
    }

    #[test]
    fn malformed_questions_are_rejected_at_load() {
        let single_option = Question {
            prompt: "Only one?".to_string(),
            options: vec!["yes".to_string()],
            correct_option_index: 0,
        };
        assert!(matches!(
            Quiz::new("q", "Bad", vec![single_option]),
            Err(QuizError::InvalidQuiz(_))
        ));

        assert!(matches!(
            Quiz::new("q", "Bad", vec![question("Out of range", 3)]),
            Err(QuizError::InvalidQuiz(_))
        ));
        assert!(matches!(
            Quiz::new("q", "Bad", vec![question("  ", 0)]),
            Err(QuizError::InvalidQuiz(_))
        ));
    }

    #[test]
    fn fresh_attempt_starts_at_first_question() {
        let quiz = three_question_quiz();
        let attempt = quiz.start();
        assert_eq!(attempt.current_index(), 0);
        assert_eq!(attempt.selected_index(), None);
        assert_eq!(attempt.score_so_far(), 0);
        assert!(!attempt.is_finished());
        assert_eq!(attempt.current_question().prompt, "Powerhouse?");
    }

    #[test]
    fn finishes_exactly_on_last_advance() {
        let quiz = three_question_quiz();
        let mut attempt = quiz.start();

        for step in 0..quiz.len() {
            assert!(!attempt.is_finished(), "finished early at step {step}");
            attempt.select_answer(0).expect("select");
            attempt.advance().expect("advance");
            assert!(attempt.current_index() < quiz.len());
            assert!(attempt.score_so_far() <= step + 1);
        }

        assert!(attempt.is_finished());
        assert_eq!(attempt.state(), AttemptState::Finished { last_index: 2 });
    }

    #[test]
    fn selection_can_change_before_advancing() {
        let quiz = three_question_quiz();
        let mut attempt = quiz.start();

        attempt.select_answer(2).expect("select");
        attempt.select_answer(0).expect("reselect");
        assert_eq!(attempt.selected_index(), Some(0));
        assert!(attempt.advance().expect("advance"));
        assert_eq!(attempt.score_so_far(), 1);
        assert_eq!(attempt.selected_index(), None);
    }

    #[test]
    fn advance_without_selection_is_a_precondition_violation() {
        let quiz = three_question_quiz();
        let mut attempt = quiz.start();

        attempt.select_answer(1).expect("select");
        attempt.advance().expect("first advance");
        assert_eq!(
            attempt.advance(),
            Err(QuizError::PreconditionViolation("no answer selected"))
        );
        assert_eq!(attempt.current_index(), 1);
    }

    #[test]
    fn no_transitions_after_finish() {
        let quiz = Quiz::new("q", "One", vec![question("Only", 1)]).expect("quiz");
        let mut attempt = quiz.start();
        attempt.select_answer(1).expect("select");
        attempt.advance().expect("advance");

        assert!(matches!(attempt.select_answer(0), Err(QuizError::PreconditionViolation(_))));
        assert!(matches!(attempt.advance(), Err(QuizError::PreconditionViolation(_))));
        assert_eq!(attempt.score_so_far(), 1);
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let quiz = three_question_quiz();
        let mut attempt = quiz.start();
        assert!(matches!(attempt.select_answer(3), Err(QuizError::PreconditionViolation(_))));
        assert_eq!(attempt.selected_index(), None);
    }

    #[test]
    fn result_requires_finished_attempt() {
        let quiz = three_question_quiz();
        let attempt = quiz.start();
        assert!(matches!(attempt.result(), Err(QuizError::PreconditionViolation(_))));
    }

    #[test]
    fn score_counts_matching_answers() {
        let quiz = three_question_quiz();
        let review = replay(&quiz, &[0, 0, 2]).expect("replay");
        assert_eq!(review.outcomes, vec![true, false, true]);
        assert_eq!(review.result.score, 2);
        assert_eq!(review.result.total, 3);
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(0, 3), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(3, 3), 100);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(1, 2), 50);
    }

    #[test]
    fn replay_result_matches_manual_walk() {
        let quiz = three_question_quiz();
        let review = replay(&quiz, &[1, 1, 0]).expect("replay");
        assert_eq!(review.result, QuizResult { score: 1, total: 3, percentage: 33 });
    }

    #[test]
    fn replay_rejects_partial_answer_sheets() {
        let quiz = three_question_quiz();
        assert_eq!(
            replay(&quiz, &[0, 1]),
            Err(QuizError::AnswerCount { expected: 3, actual: 2 })
        );
    }

    #[test]
    fn questions_deserialize_from_stored_shape() {
        let raw = serde_json::json!([
            {"question": "2 + 2?", "options": ["3", "4"], "correct_answer": 1}
        ]);
        let questions: Vec<Question> = serde_json::from_value(raw).expect("questions");
        assert_eq!(questions[0].prompt, "2 + 2?");
        assert_eq!(questions[0].correct_option_index, 1);
    }
}
