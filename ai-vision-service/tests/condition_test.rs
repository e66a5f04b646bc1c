mod common;

use ai_vision_service::dtos::ConditionAnalysisResult;
use ai_vision_service::services::{
    AnalyzerError, ConditionAnalyzer, ConditionAssessment, ConditionTag,
};
use async_trait::async_trait;
use axum::http::StatusCode;
use common::{call, call_with, get, post_json, TestApp, ANALYZE_PATH};
use serde_json::{json, Value};
use std::sync::Arc;

const EXPECTED_BODY: &str = r#"{"condition_score":0.85,"tags":["modern","well-lit","clean"],"estimated_renovation_cost":0}"#;

#[tokio::test]
async fn any_image_url_gets_the_fixed_assessment() {
    let urls = [
        "",
        "https://cdn.example.com/listings/42/living-room.jpg",
        "not even a url",
        "ftp://unreachable.invalid/photo.png",
    ];

    for url in urls {
        let (status, body) = call(post_json(ANALYZE_PATH, json!({ "image_url": url }).to_string())).await;
        assert_eq!(status, StatusCode::OK, "image_url: {:?}", url);

        let result: ConditionAnalysisResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.condition_score, 0.85);
        assert_eq!(
            result.tags,
            vec![ConditionTag::Modern, ConditionTag::WellLit, ConditionTag::Clean]
        );
        assert_eq!(result.estimated_renovation_cost, 0);
    }
}

#[tokio::test]
async fn response_body_is_byte_identical_across_calls() {
    let request = json!({ "image_url": "https://cdn.example.com/a.jpg" }).to_string();

    let (_, first) = call(post_json(ANALYZE_PATH, request.clone())).await;
    let (_, second) = call(post_json(ANALYZE_PATH, request)).await;

    assert_eq!(first, second);
    assert_eq!(String::from_utf8(first).unwrap(), EXPECTED_BODY);
}

#[tokio::test]
async fn spawned_server_serves_analysis() {
    let app = TestApp::spawn().await;

    let response = reqwest::Client::new()
        .post(format!("{}{}", app.address, ANALYZE_PATH))
        .json(&json!({ "image_url": "https://cdn.example.com/b.jpg" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), EXPECTED_BODY);
}

#[tokio::test]
async fn malformed_bodies_are_rejected_with_422() {
    let cases = [
        json!({}).to_string(),
        json!({ "image_url": null }).to_string(),
        json!({ "image_url": 12 }).to_string(),
        json!({ "image_url": ["a", "b"] }).to_string(),
        json!({ "url": "https://cdn.example.com/a.jpg" }).to_string(),
        "image_url=https://cdn.example.com/a.jpg".to_string(),
        String::new(),
        r#"{"image_url":"x"}}}garbage"#.to_string(),
        r#"{"image_url":"x"} {"image_url":"y"}"#.to_string(),
    ];

    for body in cases {
        let (status, bytes) = call(post_json(ANALYZE_PATH, body.clone())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {:?}", body);

        let error: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error["error"], "Validation error");
        assert!(error["details"].is_string());
    }
}

#[tokio::test]
async fn missing_image_url_is_named_in_diagnostic() {
    let (_, bytes) = call(post_json(ANALYZE_PATH, "{}")).await;

    let error: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(error["details"].as_str().unwrap().contains("image_url"));
}

#[tokio::test]
async fn repeated_image_url_keeps_the_last_value() {
    let (status, bytes) = call(post_json(
        ANALYZE_PATH,
        r#"{"image_url":7,"image_url":"https://cdn.example.com/a.jpg"}"#,
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, EXPECTED_BODY.as_bytes());
}

#[tokio::test]
async fn oversized_body_is_rejected_with_413() {
    let url = format!("https://cdn.example.com/{}", "a".repeat(32 * 1024));
    let (status, _) = call(post_json(ANALYZE_PATH, json!({ "image_url": url }).to_string())).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn get_on_analyze_route_is_405() {
    let (status, _) = call(get(ANALYZE_PATH)).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

struct FailingAnalyzer;

#[async_trait]
impl ConditionAnalyzer for FailingAnalyzer {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn analyze(&self, _image_url: &str) -> Result<ConditionAssessment, AnalyzerError> {
        Err(AnalyzerError::Backend("inference timed out".into()))
    }

    async fn health_check(&self) -> Result<(), AnalyzerError> {
        Ok(())
    }
}

#[tokio::test]
async fn backend_failure_surfaces_as_500() {
    let (status, bytes) = call_with(
        Arc::new(FailingAnalyzer),
        post_json(ANALYZE_PATH, json!({ "image_url": "x" }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error["error"], "Internal server error");
}
