//! Axum route handlers for the Conversion API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::conversion::classify::classify;
use crate::conversion::converter::{convert_text, ConversionRequest, ConversionResponse};
use crate::conversion::feedback::{record_feedback, FeedbackRecord};
use crate::errors::{AppError, GENERIC_DETAILS};
use crate::llm_client::LlmError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub status: &'static str,
    pub message: String,
}

/// Warns if the handler future is dropped (client went away) before the
/// upstream call returned.
struct InFlight {
    finished: bool,
}

impl InFlight {
    fn start() -> Self {
        Self { finished: false }
    }

    fn finish(&mut self) {
        self.finished = true;
    }

    fn is_abandoned(&self) -> bool {
        !self.finished
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if self.is_abandoned() {
            warn!("Client disconnected before conversion finished; upstream result dropped");
        }
    }
}

/// POST /api/convert
///
/// Rewrites `text` into the register of `target` (boss, colleague, customer).
/// Unknown targets use the boss persona.
pub async fn handle_convert(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ConversionResponse>, AppError> {
    let Json(body) = payload?;
    let request = parse_conversion_request(body)?;

    let text = request
        .text()
        .ok_or_else(|| AppError::InvalidRequest("Text is required".to_string()))?;
    let persona = request.target;

    let request_id = Uuid::new_v4();
    let span = info_span!("convert", %request_id, persona = persona.as_str());

    async move {
        let mut in_flight = InFlight::start();
        let result = convert_text(
            state.gateway.as_ref(),
            text,
            persona,
            state.config.wrap_user_text,
        )
        .await;
        in_flight.finish();

        match result {
            Ok(converted) => {
                info!("Conversion succeeded: output_chars={}", converted.chars().count());
                Ok(Json(ConversionResponse { converted }))
            }
            Err(e) => Err(conversion_error(e, state.config.debug)),
        }
    }
    .instrument(span)
    .await
}

/// Only a JSON object is a valid conversion body; arrays and scalars are rejected
/// before any field is looked at.
fn parse_conversion_request(body: Value) -> Result<ConversionRequest, AppError> {
    let invalid = || AppError::InvalidRequest("Invalid request body".to_string());

    if !body.is_object() {
        debug!("Rejected non-object conversion body");
        return Err(invalid());
    }
    serde_json::from_value(body).map_err(|e| {
        debug!("Rejected conversion body: {e}");
        invalid()
    })
}

/// Logs the gateway failure in full and builds the client-facing error.
fn conversion_error(err: LlmError, debug: bool) -> AppError {
    let kind = classify(&err);
    error!("Conversion failed ({kind:?}): {err}");

    AppError::Conversion {
        message: kind.user_message(),
        details: if debug {
            err.to_string()
        } else {
            GENERIC_DETAILS.to_string()
        },
    }
}

/// POST /api/feedback
///
/// Log-only sink for user ratings. Accepts any JSON body.
pub async fn handle_feedback(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let Json(body) = payload?;
    let feedback_id = record_feedback(&FeedbackRecord::from_json(&body));

    Ok(Json(FeedbackResponse {
        status: "ok",
        message: format!("Feedback received ({feedback_id})"),
    }))
}
