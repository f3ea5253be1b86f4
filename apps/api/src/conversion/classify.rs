//! Maps gateway failures to the message shown to the caller.
//!
//! Best effort: the provider's error shapes are not a documented contract, so
//! classification is a substring match over the error's display text. Anything
//! unmatched lands in `Generic`.

use crate::llm_client::LlmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotConfigured,
    QuotaExceeded,
    Authentication,
    Generic,
}

/// Substring patterns (lowercase) checked in order; first hit wins.
const PATTERNS: &[(&[&str], FailureKind)] = &[
    (&["rate_limit"], FailureKind::QuotaExceeded),
    (&["authentication", "api_key"], FailureKind::Authentication),
];

impl FailureKind {
    pub fn user_message(self) -> &'static str {
        match self {
            FailureKind::NotConfigured => {
                "LLM gateway is not configured. Contact the administrator."
            }
            FailureKind::QuotaExceeded => "Request quota exceeded. Please retry later.",
            FailureKind::Authentication => "Authentication error. Contact the administrator.",
            FailureKind::Generic => "Conversion failed.",
        }
    }
}

pub fn classify(error: &LlmError) -> FailureKind {
    if matches!(error, LlmError::NotConfigured) {
        return FailureKind::NotConfigured;
    }
    classify_message(&error.to_string())
}

fn classify_message(message: &str) -> FailureKind {
    let message = message.to_lowercase();
    PATTERNS
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| message.contains(needle)))
        .map(|(_, kind)| *kind)
        .unwrap_or(FailureKind::Generic)
}
