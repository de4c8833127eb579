//! Integration tests for `GeminiClient` using wiremock HTTP mocks.

use kit_consultant::session::{ERROR_REPLY_FALLBACK, WELCOME_MESSAGE};
use kit_consultant::{ChatSession, ConsultantError, GeminiClient, GenerationRequest, TextGenerator};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-3-flash-preview";
const ENDPOINT: &str = "/v1beta/models/gemini-3-flash-preview:generateContent";

fn test_client(base_url: &str) -> GeminiClient {
    GeminiClient::with_base_url("test-key", MODEL, 30, base_url)
        .expect("client construction should not fail")
}

fn reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn generate_posts_prompt_and_returns_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "systemInstruction": { "parts": [{ "text": "be a kit expert" }] },
            "contents": [{ "role": "user", "parts": [{ "text": "Is the Bayern kit player edition?" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("Yes, it is.")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let request = GenerationRequest::new("be a kit expert", "Is the Bayern kit player edition?");
    let text = client.generate(&request).await.expect("should generate");

    assert_eq!(text, "Yes, it is.");
}

#[tokio::test]
async fn generate_surfaces_api_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .generate(&GenerationRequest::new("sys", "hi"))
        .await
        .expect_err("should fail");

    match err {
        ConsultantError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "API key not valid.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn generate_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .generate(&GenerationRequest::new("sys", "hi"))
        .await
        .expect_err("should fail");

    assert!(matches!(err, ConsultantError::Decode(_)));
}

#[tokio::test]
async fn session_falls_back_on_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut session = ChatSession::new();
    let reply = session
        .send(&client, "Any retro Arsenal kits?")
        .await
        .expect("input should be accepted");

    assert_eq!(reply.text, ERROR_REPLY_FALLBACK);
    assert_eq!(session.messages()[0].text, WELCOME_MESSAGE);
    assert_eq!(session.messages().len(), 3);
}
