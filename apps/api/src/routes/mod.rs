pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::conversion::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Frontend assets; `/` resolves to index.html.
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/convert", post(handlers::handle_convert))
        .route("/api/feedback", post(handlers::handle_feedback))
        .fallback_service(static_files)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::conversion::persona::Persona;
    use crate::llm_client::{ChatGateway, LlmClient, LlmError};

    enum StubReply {
        Text(&'static str),
        ApiError(u16, &'static str),
        Empty,
    }

    /// Gateway double that records every exchange it receives.
    struct StubGateway {
        reply: StubReply,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl StubGateway {
        fn new(reply: StubReply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn last_system_prompt(&self) -> String {
            self.calls.lock().unwrap().last().unwrap().0.clone()
        }
    }

    #[async_trait]
    impl ChatGateway for StubGateway {
        async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((system.to_string(), user.to_string()));
            match &self.reply {
                StubReply::Text(text) => Ok(text.to_string()),
                StubReply::ApiError(status, message) => Err(LlmError::Api {
                    status: *status,
                    message: message.to_string(),
                }),
                StubReply::Empty => Err(LlmError::EmptyResponse),
            }
        }
    }

    fn app_with(gateway: Arc<dyn ChatGateway>, config: Config) -> Router {
        build_router(AppState { gateway, config })
    }

    fn app(gateway: Arc<StubGateway>) -> Router {
        app_with(gateway, Config::default())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response: Response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(StubGateway::new(StubReply::Empty)), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_convert_round_trip_korean() {
        let gateway = StubGateway::new(StubReply::Text("내일까지 보고 부탁드립니다."));
        let (status, body) = send(
            app(gateway.clone()),
            post_json(
                "/api/convert",
                r#"{"text":"내일까지 부탁해요","target":"boss"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "converted": "내일까지 보고 부탁드립니다." }));
        assert_eq!(gateway.call_count(), 1);
        assert_eq!(gateway.last_system_prompt(), Persona::Boss.system_prompt());
    }

    #[tokio::test]
    async fn test_convert_strips_wrapping_quotes() {
        let gateway = StubGateway::new(StubReply::Text("\"Hello there\""));
        let (status, body) = send(
            app(gateway),
            post_json("/api/convert", r#"{"text":"hi","target":"customer"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["converted"], "Hello there");
    }

    #[tokio::test]
    async fn test_convert_selects_persona_for_each_target() {
        for (target, persona) in [
            ("boss", Persona::Boss),
            ("colleague", Persona::Colleague),
            ("customer", Persona::Customer),
            ("intern", Persona::Boss),
        ] {
            let gateway = StubGateway::new(StubReply::Text("ok"));
            let body = json!({ "text": "확인 부탁", "target": target }).to_string();
            let (status, _) = send(app(gateway.clone()), post_json("/api/convert", &body)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(gateway.last_system_prompt(), persona.system_prompt());
        }
    }

    #[tokio::test]
    async fn test_convert_missing_target_uses_boss() {
        let gateway = StubGateway::new(StubReply::Text("ok"));
        send(
            app(gateway.clone()),
            post_json("/api/convert", r#"{"text":"확인 부탁"}"#),
        )
        .await;
        assert_eq!(gateway.last_system_prompt(), Persona::Boss.system_prompt());
    }

    #[tokio::test]
    async fn test_convert_empty_or_missing_text_is_400_without_gateway_call() {
        for body in [r#"{"text":""}"#, r#"{"target":"boss"}"#, r#"{"text":"   "}"#] {
            let gateway = StubGateway::new(StubReply::Text("unused"));
            let (status, response) =
                send(app(gateway.clone()), post_json("/api/convert", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response, json!({ "error": "Text is required" }));
            assert_eq!(gateway.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_convert_malformed_body_is_400() {
        let gateway = StubGateway::new(StubReply::Text("unused"));
        let (status, body) =
            send(app(gateway.clone()), post_json("/api/convert", "{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid request body" }));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_convert_array_body_is_400_without_gateway_call() {
        for body in [r#"["hello","colleague"]"#, "[]", r#""hello""#] {
            let gateway = StubGateway::new(StubReply::Text("converted!"));
            let (status, response) =
                send(app(gateway.clone()), post_json("/api/convert", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response, json!({ "error": "Invalid request body" }));
            assert_eq!(gateway.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_convert_without_content_type_is_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/convert")
            .body(Body::from(r#"{"text":"hi"}"#))
            .unwrap();
        let (status, body) = send(app(StubGateway::new(StubReply::Text("x"))), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request body");
    }

    #[tokio::test]
    async fn test_convert_without_credential_reports_missing_configuration() {
        // The real client, built without an API key.
        let client = LlmClient::from_config(&Config::default()).unwrap();
        let app = app_with(Arc::new(client), Config::default());
        let (status, body) = send(
            app,
            post_json("/api/convert", r#"{"text":"내일까지 부탁해요"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("not configured"));
    }

    #[tokio::test]
    async fn test_convert_rate_limit_maps_to_quota_message() {
        let gateway = StubGateway::new(StubReply::ApiError(
            429,
            "Rate limit reached for org_abc (type: tokens, code: RATE_LIMIT_exceeded)",
        ));
        let (status, body) = send(
            app(gateway),
            post_json("/api/convert", r#"{"text":"hi"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Request quota exceeded. Please retry later.");
        assert_eq!(body["details"], "Internal Server Error");
        assert!(!body.to_string().contains("org_abc"));
    }

    #[tokio::test]
    async fn test_convert_auth_failure_maps_to_auth_message() {
        let gateway = StubGateway::new(StubReply::ApiError(
            401,
            "Invalid API Key (type: invalid_request_error, code: invalid_api_key)",
        ));
        let (_, body) = send(app(gateway), post_json("/api/convert", r#"{"text":"hi"}"#)).await;
        assert_eq!(body["error"], "Authentication error. Contact the administrator.");
    }

    #[tokio::test]
    async fn test_convert_empty_completion_is_generic_failure() {
        let gateway = StubGateway::new(StubReply::Empty);
        let (status, body) =
            send(app(gateway), post_json("/api/convert", r#"{"text":"hi"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Conversion failed.");
    }

    #[tokio::test]
    async fn test_convert_debug_mode_includes_raw_details() {
        let gateway = StubGateway::new(StubReply::ApiError(500, "upstream exploded"));
        let config = Config {
            debug: true,
            ..Config::default()
        };
        let (_, body) = send(
            app_with(gateway, config),
            post_json("/api/convert", r#"{"text":"hi"}"#),
        )
        .await;
        assert_eq!(body["error"], "Conversion failed.");
        assert!(body["details"]
            .as_str()
            .unwrap()
            .contains("upstream exploded"));
    }

    #[tokio::test]
    async fn test_feedback_is_acknowledged() {
        let (status, body) = send(
            app(StubGateway::new(StubReply::Empty)),
            post_json(
                "/api/feedback",
                r#"{"text":"내일까지 부탁해요","target":"boss","feedback":"helpful"}"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_feedback_accepts_empty_object() {
        let (status, _) = send(
            app(StubGateway::new(StubReply::Empty)),
            post_json("/api/feedback", "{}"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_feedback_unparseable_body_is_400() {
        let (status, body) = send(
            app(StubGateway::new(StubReply::Empty)),
            post_json("/api/feedback", "not json"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request body");
    }
}
