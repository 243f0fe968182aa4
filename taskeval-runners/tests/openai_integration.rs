use pretty_assertions::assert_eq;
use serde_json::json;
use taskeval_core::{available_models, ModelRunner, RAW_FALLBACK_FIELD};
use taskeval_runners::OpenAiChatRunner;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn runner_for(server: &MockServer) -> OpenAiChatRunner {
    let config = available_models()["openai_gpt4o"].clone();
    OpenAiChatRunner::new(config, "test-key".to_string())
        .with_api_url(format!("{}/v1/chat/completions", server.uri()))
}

fn chat_response(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    }))
}

#[tokio::test]
async fn parses_json_object_responses() {
    let server = MockServer::start().await;
    let content = r#"{"intent":"billing_issue","priority":"high","requires_human":true,"target_system":"billing","sla_hours":4}"#;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({ "model": "gpt-4o", "temperature": 0.0 })))
        .respond_with(chat_response(content))
        .expect(1)
        .mount(&server)
        .await;

    let predicted = runner_for(&server)
        .generate("I was double charged, urgent", None)
        .await
        .unwrap();

    assert_eq!(predicted["intent"], "billing_issue");
    assert_eq!(predicted["sla_hours"], 4);
}

#[tokio::test]
async fn non_json_content_becomes_raw_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(chat_response("Sorry, I can't produce JSON here."))
        .mount(&server)
        .await;

    let predicted = runner_for(&server)
        .generate("anything", None)
        .await
        .unwrap();

    assert_eq!(
        predicted[RAW_FALLBACK_FIELD],
        "Sorry, I can't produce JSON here."
    );
    assert_eq!(predicted.len(), 1);
}

#[tokio::test]
async fn json_array_content_is_not_a_valid_output() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(chat_response(r#"["not", "an", "object"]"#))
        .mount(&server)
        .await;

    let predicted = runner_for(&server)
        .generate("anything", None)
        .await
        .unwrap();

    assert!(predicted.contains_key(RAW_FALLBACK_FIELD));
}

#[tokio::test]
async fn api_errors_propagate_as_http_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let result = runner_for(&server).generate("anything", None).await;
    assert!(matches!(result, Err(taskeval_core::EvalError::Http(_))));
}

#[tokio::test]
async fn prompt_carries_context_when_present() {
    let server = MockServer::start().await;
    let content = r#"{"intent":"general_question","priority":"medium","requires_human":true,"target_system":"general","sla_hours":24}"#;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(chat_response(content))
        .mount(&server)
        .await;

    let runner = runner_for(&server);
    runner
        .generate("what plans do you have", Some("trial account"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let user_message = body["messages"][1]["content"].as_str().unwrap();
    assert!(user_message.contains("Additional account context:\ntrial account"));
    assert!(user_message.contains("Customer request:\nwhat plans do you have"));
}
