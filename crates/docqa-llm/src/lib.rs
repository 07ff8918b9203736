//! Chat-completion client and the prompt that feeds it retrieved context.

pub mod prompt;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use docqa_core::config::{LlmSettings, API_KEY_VAR};
use docqa_core::error::Error;
use docqa_core::traits::ChatModel;

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Blocking client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct ChatClient {
    client: Client,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
    api_key: String,
}

impl ChatClient {
    pub fn from_env(settings: &LlmSettings) -> anyhow::Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| Error::InvalidConfig(format!("{API_KEY_VAR} is not set")))?;
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            api_key,
        })
    }
}

impl ChatModel for ChatClient {
    fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage { role: "user", content: prompt }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "chat completion request");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| Error::LlmProvider(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::LlmProvider(format!("{url} returned {status}: {body}")).into());
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .map_err(|e| Error::LlmProvider(format!("invalid completion payload: {e}")))?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::LlmProvider("completion had no choices".to_string()))?;
        Ok(choice.message.content.trim().to_string())
    }
}
