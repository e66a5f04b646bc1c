#![allow(dead_code)]

use ai_language_service::config::LanguageConfig;
use ai_language_service::services::PlaceholderAgent;
use ai_language_service::startup::{build_router, AppState, Application};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use std::sync::Arc;
use tower::util::ServiceExt;

pub const CHAT_PATH: &str = "/chat/agent";

/// Config for tests: random port, no OTLP export.
pub fn test_config() -> LanguageConfig {
    let mut config = LanguageConfig::default();
    config.common.port = 0;
    config
}

/// In-process router backed by the placeholder agent.
pub fn router() -> Router {
    build_router(AppState::new(test_config(), Arc::new(PlaceholderAgent::new())))
}

/// Send a request through a fresh router and return status and raw body.
pub async fn call(request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

pub fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let app = Application::build(test_config())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
