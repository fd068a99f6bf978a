use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::core::config::Settings;
use crate::services::collaborators::{GenerationError, TextGeneration};

/// Chat-completions client for any OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub(crate) struct OpenAiTextGeneration {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    total_tokens: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl OpenAiTextGeneration {
    /// `Ok(None)` when no API key is configured; callers then use their static fallbacks.
    pub(crate) fn from_settings(settings: &Settings) -> Result<Option<Self>> {
        if !settings.ai().is_configured() {
            return Ok(None);
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(settings.ai().ai_request_timeout))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Some(Self {
            client,
            api_key: settings.ai().openai_api_key.clone(),
            base_url: settings.ai().openai_base_url.trim_end_matches('/').to_string(),
            model: settings.ai().ai_model.clone(),
            max_tokens: settings.ai().ai_max_tokens,
        }))
    }
}

#[async_trait]
impl TextGeneration for OpenAiTextGeneration {
    async fn complete(
        &self,
        system_instruction: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, GenerationError> {
        let timer = Instant::now();
        let payload = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: system_instruction },
                ChatMessage { role: "user", content: user_prompt },
            ],
            temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|err| GenerationError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let body: ChatCompletionResponse =
            response.json().await.map_err(|err| GenerationError::Request(err.to_string()))?;

        tracing::info!(
            model = %self.model,
            duration_seconds = timer.elapsed().as_secs_f64(),
            tokens_used = body.usage.as_ref().and_then(|usage| usage.total_tokens),
            "Text generation completed"
        );

        completion_text(body)
    }
}

fn completion_text(body: ChatCompletionResponse) -> Result<String, GenerationError> {
    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(GenerationError::EmptyCompletion)
}

fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.chars().take(200).collect(),
    }
}
