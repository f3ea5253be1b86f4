//! Tone conversion: persona prompt + user text → gateway → cleaned completion.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conversion::cleanup::clean_completion;
use crate::conversion::persona::Persona;
use crate::conversion::prompts::build_user_message;
use crate::llm_client::{ChatGateway, LlmError};

#[derive(Debug, Deserialize)]
pub struct ConversionRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub target: Persona,
}

impl ConversionRequest {
    /// The input text, if present and not blank.
    pub fn text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct ConversionResponse {
    pub converted: String,
}

/// Runs one conversion against the gateway. `text` must already be validated.
pub async fn convert_text(
    gateway: &dyn ChatGateway,
    text: &str,
    persona: Persona,
    wrap_user_text: bool,
) -> Result<String, LlmError> {
    let system = persona.system_prompt();
    let user = build_user_message(text, wrap_user_text);

    debug!(
        "Requesting conversion: persona={}, input_chars={}",
        persona.as_str(),
        text.chars().count()
    );

    let completion = gateway.complete(&system, &user).await?;
    Ok(clean_completion(&completion).to_string())
}
