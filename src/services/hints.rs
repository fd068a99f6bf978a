use std::sync::Arc;

use crate::services::collaborators::TextGeneration;

const HINT_SYSTEM_INSTRUCTION: &str =
    "Provide a subtle hint for the multiple-choice question. Do not reveal the answer.";
const HINT_TEMPERATURE: f32 = 0.9;

pub(crate) const UNCONFIGURED_HINT: &str =
    "Think carefully about the key concepts from the lesson content!";
pub(crate) const FAILED_HINT: &str =
    "Think about the main concepts we discussed in the last lesson!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HintSource {
    Generated,
    Unconfigured,
    Fallback,
}

impl HintSource {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Generated => "generated",
            Self::Unconfigured => "unconfigured",
            Self::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Hint {
    pub(crate) text: String,
    pub(crate) source: HintSource,
}

/// Asks the text generator for a nudge on one quiz question.
///
/// Never fails: an absent generator or a failed call yields fixed fallback text so the quiz
/// keeps moving. No caching and no retries; asking again is the retry.
#[derive(Clone)]
pub(crate) struct HintMediator {
    generator: Option<Arc<dyn TextGeneration>>,
}

impl HintMediator {
    pub(crate) fn new(generator: Option<Arc<dyn TextGeneration>>) -> Self {
        Self { generator }
    }

    pub(crate) async fn request_hint(&self, question_prompt: &str) -> Hint {
        let hint = self.generate(question_prompt).await;
        metrics::counter!("quiz_hints_total", "outcome" => hint.source.as_str()).increment(1);
        hint
    }

    async fn generate(&self, question_prompt: &str) -> Hint {
        let Some(generator) = &self.generator else {
            return Hint { text: UNCONFIGURED_HINT.to_string(), source: HintSource::Unconfigured };
        };

        let user_prompt = format!(
            "Help the student solve this quiz question without giving the direct answer: \"{question_prompt}\""
        );

        match generator.complete(HINT_SYSTEM_INSTRUCTION, &user_prompt, HINT_TEMPERATURE).await {
            Ok(text) => Hint { text, source: HintSource::Generated },
            Err(err) => {
                tracing::warn!(error = %err, "Hint generation failed; using fallback hint");
                Hint { text: FAILED_HINT.to_string(), source: HintSource::Fallback }
            }
        }
    }
}
