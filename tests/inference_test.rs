//! Inference client tests
//!
//! Runs the dispatcher against a wiremock inference double: request
//! shape, tool-call precedence and failure classification.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use toolbridge::config::InferenceConfig;
use toolbridge::llm::{translate_tools, DispatchResult, InferenceClient};
use toolbridge::mcp::Tool;

fn inference_config(base_url: &str) -> InferenceConfig {
    InferenceConfig {
        base_url: base_url.to_string(),
        model: "llama-3.1-8b-instruct".to_string(),
        api_key_env: None,
        timeout: 5,
    }
}

fn sample_tools() -> Vec<Tool> {
    vec![Tool {
        name: "search_docs".to_string(),
        description: "Search the documentation".to_string(),
        input_schema: json!({"type": "object"}),
    }]
}

#[tokio::test]
async fn test_dispatch_sends_messages_and_translated_tools() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/infer"))
        .and(body_partial_json(json!({
            "model": "llama-3.1-8b-instruct",
            "messages": [
                {"role": "system", "content": "be helpful"},
                {"role": "user", "content": "hi"}
            ],
            "tools": [
                {"name": "search_docs", "parameters": {"type": "object"}}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "hello"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = InferenceClient::new(inference_config(&format!("{}/v1/infer", server.uri())))
        .unwrap();
    let result = client
        .dispatch("be helpful", "hi", &translate_tools(&sample_tools()))
        .await
        .unwrap();

    assert_eq!(
        result,
        DispatchResult::Text {
            body: "hello".to_string()
        }
    );
}

#[tokio::test]
async fn test_first_of_several_tool_calls_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tool_calls": [
                {"name": "list_zones", "arguments": {}},
                {"name": "search_docs", "arguments": {}}
            ]
        })))
        .mount(&server)
        .await;

    let client = InferenceClient::new(inference_config(&server.uri())).unwrap();
    let result = client.dispatch("sys", "hi", &[]).await.unwrap();
    assert_eq!(
        result,
        DispatchResult::ToolCall {
            name: "list_zones".to_string()
        }
    );
}

#[tokio::test]
async fn test_missing_response_text_yields_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = InferenceClient::new(inference_config(&server.uri())).unwrap();
    let result = client.dispatch("sys", "hi", &[]).await.unwrap();
    assert_eq!(
        result,
        DispatchResult::Text {
            body: "No response received.".to_string()
        }
    );
}

#[tokio::test]
async fn test_empty_toolset_is_still_dispatched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"tools": []})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "no tools"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = InferenceClient::new(inference_config(&server.uri())).unwrap();
    let result = client.dispatch("sys", "hi", &[]).await.unwrap();
    assert_eq!(
        result,
        DispatchResult::Text {
            body: "no tools".to_string()
        }
    );
}

#[tokio::test]
async fn test_http_error_status_is_an_inference_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let client = InferenceClient::new(inference_config(&server.uri())).unwrap();
    let err = client.dispatch("sys", "hi", &[]).await.unwrap_err();
    assert_eq!(err.category(), "inference");
    assert!(err.to_string().contains("quota exceeded"));
}

#[tokio::test]
async fn test_malformed_response_is_an_inference_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = InferenceClient::new(inference_config(&server.uri())).unwrap();
    let err = client.dispatch("sys", "hi", &[]).await.unwrap_err();
    assert_eq!(err.category(), "inference");
}
