//! GroqInterpreter integration tests against a stub relay
//!
//! The stub speaks the upstream chat-completion contract on an ephemeral
//! port; no live model is involved.

use axum::{Json, Router, http::StatusCode, routing::post};
use serde_json::{Value, json};

use kasir_client::{ClientConfig, GroqInterpreter, Interpreter, KasirError};
use shared::Intent;

async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Stub relay answering `/api/groq` with a fixed status and body
async fn spawn_relay(status: StatusCode, body: Value) -> String {
    let app = Router::new().route(
        "/api/groq",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );
    format!("{}/api/groq", spawn_server(app).await)
}

fn chat_reply(content: &str) -> Value {
    json!({"choices": [{"message": {"content": content}}]})
}

#[tokio::test]
async fn test_interpret_happy_path_through_relay() {
    let content = r#"{"intent":"add_item","items":[{"action":"add","name":"es teh","quantity":2}],"voice_response":"Siap!","suggestion":null}"#;
    let relay_url = spawn_relay(StatusCode::OK, chat_reply(content)).await;

    let interpreter = GroqInterpreter::new(ClientConfig::new(relay_url));
    let command = interpreter.interpret("es teh dua", &[]).await.unwrap();

    assert_eq!(command.intent, Intent::AddItem);
    assert_eq!(command.items[0].name.as_deref(), Some("Es Teh Manis"));
    assert_eq!(command.items[0].quantity, 2);
}

#[tokio::test]
async fn test_fenced_reply_still_parses() {
    let content = "```json\n{\"intent\":\"greeting\",\"items\":[],\"voice_response\":\"Halo!\"}\n```";
    let relay_url = spawn_relay(StatusCode::OK, chat_reply(content)).await;

    let interpreter = GroqInterpreter::new(ClientConfig::new(relay_url));
    let command = interpreter.interpret("halo bang", &[]).await.unwrap();

    assert_eq!(command.intent, Intent::Greeting);
    assert_eq!(command.voice_response, "Halo!");
}

#[tokio::test]
async fn test_malformed_model_output_recovers_locally() {
    let relay_url = spawn_relay(StatusCode::OK, chat_reply("bukan json sama sekali")).await;

    let interpreter = GroqInterpreter::new(ClientConfig::new(relay_url));
    let command = interpreter.interpret("apa ini", &[]).await.unwrap();

    assert_eq!(command.intent, Intent::Unclear);
    assert!(command.items.is_empty());
}

#[tokio::test]
async fn test_upstream_error_message_surfaced() {
    let body = json!({"error": {"message": "Rate limit reached"}});
    let relay_url = spawn_relay(StatusCode::TOO_MANY_REQUESTS, body).await;

    let interpreter = GroqInterpreter::new(ClientConfig::new(relay_url));
    let err = interpreter.interpret("es teh", &[]).await.unwrap_err();

    match err {
        KasirError::Upstream { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "Rate limit reached");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_upstream_error_without_message_gets_generic_text() {
    let relay_url = spawn_relay(StatusCode::BAD_GATEWAY, json!({})).await;

    let interpreter = GroqInterpreter::new(ClientConfig::new(relay_url));
    let err = interpreter.interpret("es teh", &[]).await.unwrap_err();

    match err {
        KasirError::Upstream { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "API Error: 502");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_relay_404_without_key_is_missing_credential() {
    // A server with no /api/groq route answers 404
    let base = spawn_server(Router::new()).await;

    let interpreter = GroqInterpreter::new(ClientConfig::new(format!("{base}/api/groq")));
    let err = interpreter.interpret("es teh", &[]).await.unwrap_err();

    assert!(matches!(err, KasirError::MissingCredential));
}

#[tokio::test]
async fn test_relay_404_falls_back_to_direct_upstream() {
    let base = spawn_server(Router::new()).await;

    let content = r#"{"intent":"query","items":[],"voice_response":"Totalnya Rp 0"}"#;
    let direct_app = Router::new().route(
        "/openai/v1/chat/completions",
        post(move || async move { (StatusCode::OK, Json(chat_reply(content))) }),
    );
    let direct_base = spawn_server(direct_app).await;

    let mut config = ClientConfig::new(format!("{base}/api/groq")).with_api_key("gsk_dev");
    config.direct_api_url = format!("{direct_base}/openai/v1/chat/completions");

    let interpreter = GroqInterpreter::new(config);
    let command = interpreter.interpret("berapa totalnya", &[]).await.unwrap();

    assert_eq!(command.intent, Intent::Query);
}

#[tokio::test]
async fn test_empty_choices_is_an_error() {
    let relay_url = spawn_relay(StatusCode::OK, json!({"choices": []})).await;

    let interpreter = GroqInterpreter::new(ClientConfig::new(relay_url));
    let err = interpreter.interpret("es teh", &[]).await.unwrap_err();

    assert!(matches!(err, KasirError::EmptyResponse));
}
