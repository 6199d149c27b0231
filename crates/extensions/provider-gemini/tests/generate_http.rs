//! Gemini generator against a mock HTTP server.

use std::time::Duration;

use formfill_protocols::{FieldDescriptor, FieldTag, FieldValue, GenerationError, ValueGenerator};
use formfill_provider_gemini::{GeminiGenerator, GeminiSettings};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

fn generator(server: &MockServer) -> GeminiGenerator {
    GeminiGenerator::new(GeminiSettings {
        base_url: format!("{}/v1beta", server.uri()),
        timeout: Duration::from_secs(5),
        ..Default::default()
    })
    .unwrap()
}

fn fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new(FieldTag::Input, "text")
            .with_id("e1")
            .with_name("email")
            .with_label("Email"),
        FieldDescriptor::new(FieldTag::Input, "checkbox").with_name("terms"),
    ]
}

fn candidate_text(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn test_generate_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", "AIza-test"))
        .and(body_string_contains("Generate fake but realistic data"))
        .and(body_string_contains("\\\"label\\\": \\\"Email\\\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_text(
            "```json\n[{\"value\": \"jane@example.com\"}, {\"value\": true}]\n```",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let values = generator(&server).generate(&fields(), "AIza-test").await.unwrap();

    assert_eq!(values.len(), 2);
    assert_eq!(values[0].value, Some(FieldValue::text("jane@example.com")));
    assert_eq!(values[1].value, Some(FieldValue::Flag(true)));
}

#[tokio::test]
async fn test_generate_api_error_message() {
    let server = MockServer::start().await;

    let error_body = r#"{"error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}}"#;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string(error_body))
        .expect(1)
        .mount(&server)
        .await;

    let err = generator(&server).generate(&fields(), "bad-key").await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(
        err.to_string(),
        "Gemini API error: API key not valid. Please pass a valid API key."
    );
}

#[tokio::test]
async fn test_generate_api_error_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = generator(&server).generate(&fields(), "key").await.unwrap_err();
    assert_eq!(err.to_string(), "Gemini API error: Unknown error");
}

#[tokio::test]
async fn test_generate_no_candidates() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"candidates": []})))
        .mount(&server)
        .await;

    let err = generator(&server).generate(&fields(), "key").await.unwrap_err();
    assert!(matches!(err, GenerationError::EmptyResponse(_)));
    assert_eq!(err.to_string(), "No data generated from Gemini API");
}

#[tokio::test]
async fn test_generate_prose_without_array() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate_text("Sorry, I can't generate that data.")),
        )
        .mount(&server)
        .await;

    let err = generator(&server).generate(&fields(), "key").await.unwrap_err();
    assert_eq!(err.to_string(), "Could not parse JSON response from Gemini");
}

#[tokio::test]
async fn test_generate_invalid_array() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(candidate_text("[{value: unquoted}]")),
        )
        .mount(&server)
        .await;

    let err = generator(&server).generate(&fields(), "key").await.unwrap_err();
    assert!(matches!(err, GenerationError::InvalidJson(_)));
}

#[tokio::test]
async fn test_generate_custom_model() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_text("[]")))
        .expect(1)
        .mount(&server)
        .await;

    let generator = GeminiGenerator::new(GeminiSettings {
        base_url: format!("{}/v1beta", server.uri()),
        model: "gemini-1.5-pro".to_string(),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(generator.model(), "gemini-1.5-pro");
    assert!(generator.generate(&fields(), "key").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_generate_network_error() {
    let generator = GeminiGenerator::new(GeminiSettings {
        base_url: "http://127.0.0.1:1/v1beta".to_string(),
        connect_timeout: Duration::from_secs(1),
        ..Default::default()
    })
    .unwrap();

    let err = generator.generate(&fields(), "key").await.unwrap_err();
    assert!(matches!(err, GenerationError::Network(_)));
}
