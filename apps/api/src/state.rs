use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatGateway;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Upstream chat-completion gateway. `LlmClient` in production, a stub in tests.
    pub gateway: Arc<dyn ChatGateway>,
    pub config: Config,
}
