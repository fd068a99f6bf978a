use std::sync::Arc;

use crate::services::collaborators::TextGeneration;

const TUTOR_SYSTEM_INSTRUCTION: &str = "You are a helpful and encouraging LMS AI Tutor. \
Use the provided lesson context to explain concepts clearly. If the question is outside the \
scope of the lesson, politely inform the student but offer a brief general answer.";
const TUTOR_TEMPERATURE: f32 = 0.7;

pub(crate) const UNCONFIGURED_ANSWER: &str = "AI Study Assistant is currently not configured. \
Please add an API key to the server environment.";
pub(crate) const FAILED_ANSWER: &str =
    "I'm sorry, I'm having trouble connecting to my brain right now. Please try again in a moment!";

/// Lesson-scoped question answering. Same failure policy as hints: fixed text, no retries.
#[derive(Clone)]
pub(crate) struct TutorService {
    generator: Option<Arc<dyn TextGeneration>>,
}

impl TutorService {
    pub(crate) fn new(generator: Option<Arc<dyn TextGeneration>>) -> Self {
        Self { generator }
    }

    pub(crate) async fn explain(&self, lesson_content: &str, question: &str) -> String {
        let Some(generator) = &self.generator else {
            return UNCONFIGURED_ANSWER.to_string();
        };

        let user_prompt = format!("Context: {lesson_content}\n\nStudent Question: {question}");
        match generator.complete(TUTOR_SYSTEM_INSTRUCTION, &user_prompt, TUTOR_TEMPERATURE).await {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(error = %err, "Tutor answer generation failed");
                FAILED_ANSWER.to_string()
            }
        }
    }
}
