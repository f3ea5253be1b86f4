//! Feedback sink. Records are written to the log and nothing else.

use serde_json::Value;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Helpful,
    NotHelpful,
}

impl FeedbackKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "helpful" => Some(FeedbackKind::Helpful),
            "not_helpful" => Some(FeedbackKind::NotHelpful),
            _ => None,
        }
    }
}

/// A user's rating of a conversion. Every field is optional; only the body's
/// JSON-ness is checked.
#[derive(Debug, Default)]
pub struct FeedbackRecord {
    pub text: Option<String>,
    pub target: Option<String>,
    pub feedback: Option<String>,
}

impl FeedbackRecord {
    pub fn from_json(body: &Value) -> Self {
        let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_string);
        Self {
            text: field("text"),
            target: field("target"),
            feedback: field("feedback"),
        }
    }

    pub fn kind(&self) -> Option<FeedbackKind> {
        self.feedback.as_deref().and_then(FeedbackKind::parse)
    }
}

/// Logs the record and returns the id it was logged under.
pub fn record_feedback(record: &FeedbackRecord) -> Uuid {
    let feedback_id = Uuid::new_v4();
    info!(
        %feedback_id,
        persona = record.target.as_deref().unwrap_or("-"),
        feedback = record.feedback.as_deref().unwrap_or("-"),
        kind = ?record.kind(),
        text_chars = record.text.as_deref().map_or(0, |t| t.chars().count()),
        "Feedback received"
    );
    feedback_id
}
