use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Application configuration loaded from environment variables.
///
/// A missing `GROQ_API_KEY` is not an error: the service starts in degraded mode
/// and every conversion fails with a configuration error. Malformed values are.
#[derive(Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub groq_api_base: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub llm_max_tokens: u32,
    /// `None` leaves the HTTP client's own default in place (no overall timeout).
    pub llm_timeout_secs: Option<u64>,
    /// Extra attempts on transient upstream failures. 0 means a single attempt.
    pub llm_max_retries: u32,
    pub wrap_user_text: bool,
    pub debug: bool,
    pub static_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            groq_api_base: optional_env("GROQ_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            llm_model: optional_env("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            llm_temperature: parse_env("LLM_TEMPERATURE")?.unwrap_or(0.5),
            llm_max_tokens: parse_env("LLM_MAX_TOKENS")?.unwrap_or(1024),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS")?,
            llm_max_retries: parse_env("LLM_MAX_RETRIES")?.unwrap_or(0),
            wrap_user_text: parse_bool_env("CONVERT_WRAP_USER_TEXT")?.unwrap_or(true),
            debug: parse_bool_env("APP_DEBUG")?.unwrap_or(false),
            static_dir: optional_env("STATIC_DIR").unwrap_or_else(|| "frontend".to_string()),
            port: parse_env("PORT")?.unwrap_or(5000),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            groq_api_base: DEFAULT_API_BASE.to_string(),
            llm_model: DEFAULT_MODEL.to_string(),
            llm_temperature: 0.5,
            llm_max_tokens: 1024,
            llm_timeout_secs: None,
            llm_max_retries: 0,
            wrap_user_text: true,
            debug: false,
            static_dir: "frontend".to_string(),
            port: 5000,
            rust_log: "info".to_string(),
        }
    }
}

// The credential never reaches log output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("groq_api_key", &self.groq_api_key.as_ref().map(|_| "<redacted>"))
            .field("groq_api_base", &self.groq_api_base)
            .field("llm_model", &self.llm_model)
            .field("llm_temperature", &self.llm_temperature)
            .field("llm_max_tokens", &self.llm_max_tokens)
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .field("llm_max_retries", &self.llm_max_retries)
            .field("wrap_user_text", &self.wrap_user_text)
            .field("debug", &self.debug)
            .field("static_dir", &self.static_dir)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

/// Returns the variable's value, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    optional_env(key)
        .map(|raw| {
            raw.parse::<T>()
                .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'"))
        })
        .transpose()
}

fn parse_bool_env(key: &str) -> Result<Option<bool>> {
    optional_env(key)
        .map(|raw| {
            parse_bool(&raw).with_context(|| {
                format!("Environment variable '{key}' must be a boolean, got '{raw}'")
            })
        })
        .transpose()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
