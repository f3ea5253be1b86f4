/// LLM Client — the single point of entry for all chat-completion calls in BizTone.
///
/// No other module talks to the upstream provider directly. Handlers depend on the
/// `ChatGateway` trait so the provider can be stubbed in tests.
///
/// The upstream is any OpenAI-compatible `/chat/completions` endpoint (Groq by default).
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM gateway is not configured (missing API key)")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyResponse,
}

impl LlmError {
    /// Whether a retry could plausibly succeed.
    fn is_transient(&self) -> bool {
        match self {
            LlmError::Http(e) => e.is_connect() || e.is_timeout(),
            LlmError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// A chat-completion backend reachable with a system + user message pair.
///
/// Carried in `AppState` as `Arc<dyn ChatGateway>`.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Sends the two-message exchange and returns the first completion's text.
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}

impl ChatCompletionResponse {
    /// Extracts the text of the first choice. Missing or blank content is an error.
    pub fn into_text(self) -> Result<String, LlmError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(LlmError::EmptyResponse)
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<String>,
}

/// Renders a provider error body into one line, keeping `type` and `code` visible
/// (e.g. `rate_limit_exceeded`, `invalid_api_key`) for downstream classification.
fn describe_api_error(body: &str) -> String {
    match serde_json::from_str::<ProviderError>(body) {
        Ok(ProviderError { error }) => {
            let tags: Vec<String> = [("type", error.error_type), ("code", error.code)]
                .into_iter()
                .filter_map(|(name, value)| value.map(|v| format!("{name}: {v}")))
                .collect();
            if tags.is_empty() {
                error.message
            } else {
                format!("{} ({})", error.message, tags.join(", "))
            }
        }
        Err(_) => body.to_string(),
    }
}

/// The single LLM client used by the conversion service.
/// Holds one credential for the lifetime of the process.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    max_retries: u32,
}

impl LlmClient {
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.llm_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            api_key: config.groq_api_key.clone(),
            endpoint: format!(
                "{}/chat/completions",
                config.groq_api_base.trim_end_matches('/')
            ),
            model: config.llm_model.clone(),
            temperature: config.llm_temperature,
            max_tokens: config.llm_max_tokens,
            max_retries: config.llm_max_retries,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes a raw chat-completion call, returning the full response object.
    /// With `max_retries > 0`, retries transient failures with exponential backoff.
    pub async fn call(
        &self,
        system: &str,
        user: &str,
    ) -> Result<ChatCompletionResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::NotConfigured)?;

        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let mut attempt = 0;
        loop {
            match self.send_once(api_key, &request_body).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    // Exponential backoff: 500ms, 1s, 2s, ...
                    let delay = Duration::from_millis(500 * (1 << attempt.min(6)));
                    attempt += 1;
                    warn!(
                        "LLM call attempt {} failed ({}), retrying after {}ms...",
                        attempt,
                        e,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send_once(
        &self,
        api_key: &str,
        request_body: &ChatCompletionRequest<'_>,
    ) -> Result<ChatCompletionResponse, LlmError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: describe_api_error(&body),
            });
        }

        let body = response.text().await?;
        let completion: ChatCompletionResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }
}

#[async_trait]
impl ChatGateway for LlmClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        self.call(system, user).await?.into_text()
    }
}
