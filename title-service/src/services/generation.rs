use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

const TEMPERATURE: f32 = 0.8;
const MAX_TOKENS: u32 = 300;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("completion API returned status {status}: {message}")]
    Api { status: u16, message: String },
    #[error("completion API returned no usable choice")]
    EmptyCompletion,
}

#[async_trait]
pub trait TitleProvider {
    async fn complete(&self, topic: &str) -> Result<String, GenerationError>;
}

pub fn build_prompt(topic: &str) -> String {
    format!(
        "Generate 5 engaging and SEO-friendly blog titles about \"{}\". \
         Make them catchy, click-worthy, and varied in style. \
         Return only the titles, one per line, without numbering.",
        topic
    )
}

pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }
}

#[async_trait]
impl TitleProvider for OpenAiProvider {
    async fn complete(&self, topic: &str) -> Result<String, GenerationError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(topic),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        debug!("Requesting completion with model {}", self.model);

        let response = self
            .client
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .map(|detail| detail.message)
                .unwrap_or_else(|| "Failed to generate titles".to_string());

            return Err(GenerationError::Api { status, message });
        }

        let completion: ChatResponse = response.json().await?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(GenerationError::EmptyCompletion)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::build_prompt;

    #[test]
    fn prompt_embeds_topic() {
        let prompt = build_prompt("rust ownership");
        assert!(prompt.contains("\"rust ownership\""));
    }

    #[test]
    fn prompt_asks_for_plain_lines() {
        let prompt = build_prompt("anything");
        assert!(prompt.contains("one per line"));
        assert!(prompt.contains("without numbering"));
    }
}
