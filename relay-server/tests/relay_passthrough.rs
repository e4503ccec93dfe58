//! Relay integration tests
//!
//! Each test spins a stub upstream on an ephemeral port and drives the
//! relay router directly with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Body,
    http::{Request, StatusCode, header},
    routing::post,
};
use serde_json::{Value, json};
use tower::ServiceExt;

use relay_server::{Config, ServerState, create_router};

/// Spawn a stub upstream returning the given status and body, and return
/// its chat-completions URL.
async fn spawn_upstream(status: StatusCode, body: Value) -> String {
    let app = Router::new().route(
        "/openai/v1/chat/completions",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/openai/v1/chat/completions")
}

fn test_config(upstream_url: String) -> Config {
    Config {
        http_port: 0,
        groq_api_key: Some("gsk_test".to_string()),
        groq_api_url: upstream_url,
        relay_auth_token: None,
        environment: "development".to_string(),
    }
}

fn test_state(config: Config) -> ServerState {
    ServerState {
        config: Arc::new(config),
        http: reqwest::Client::new(),
    }
}

fn chat_body() -> Value {
    json!({
        "model": "llama-3.1-8b-instant",
        "messages": [
            {"role": "system", "content": "kamu asisten kasir"},
            {"role": "user", "content": "ayam bakar dua"}
        ],
        "temperature": 0.1,
        "max_tokens": 300,
        "response_format": {"type": "json_object"}
    })
}

fn relay_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/groq")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_success_body_and_status_pass_through() {
    let upstream_body = json!({
        "choices": [{"message": {"content": "{\"intent\":\"greeting\"}"}}]
    });
    let url = spawn_upstream(StatusCode::OK, upstream_body.clone()).await;
    let app = create_router(test_state(test_config(url)));

    let response = app.oneshot(relay_request(&chat_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, upstream_body);
}

#[tokio::test]
async fn test_upstream_error_relayed_verbatim() {
    let upstream_body = json!({"error": {"message": "Rate limit reached"}});
    let url = spawn_upstream(StatusCode::TOO_MANY_REQUESTS, upstream_body.clone()).await;
    let app = create_router(test_state(test_config(url)));

    let response = app.oneshot(relay_request(&chat_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response_json(response).await, upstream_body);
}

#[tokio::test]
async fn test_transport_failure_returns_generic_500() {
    // Bind then drop so nothing listens on the port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = format!("http://{addr}/openai/v1/chat/completions");
    let app = create_router(test_state(test_config(url)));

    let response = app.oneshot(relay_request(&chat_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response_json(response).await,
        json!({"error": "Internal server error"})
    );
}

#[tokio::test]
async fn test_missing_credential_returns_500() {
    let url = spawn_upstream(StatusCode::OK, json!({})).await;
    let mut config = test_config(url);
    config.groq_api_key = None;
    let app = create_router(test_state(config));

    let response = app.oneshot(relay_request(&chat_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("GROQ_API_KEY"));
}

#[tokio::test]
async fn test_invalid_payload_shape_rejected() {
    let url = spawn_upstream(StatusCode::OK, json!({})).await;
    let app = create_router(test_state(test_config(url)));

    let body = json!({"model": "llama-3.1-8b-instant", "messages": []});
    let response = app.oneshot(relay_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_inbound_auth_enforced_when_configured() {
    let url = spawn_upstream(StatusCode::OK, json!({})).await;
    let mut config = test_config(url);
    config.relay_auth_token = Some("warung-secret".to_string());
    let app = create_router(test_state(config));

    // No Authorization header
    let response = app
        .clone()
        .oneshot(relay_request(&chat_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Correct bearer token
    let request = Request::builder()
        .method("POST")
        .uri("/api/groq")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, "Bearer warung-secret")
        .body(Body::from(serde_json::to_vec(&chat_body()).unwrap()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_endpoint() {
    let url = spawn_upstream(StatusCode::OK, json!({})).await;
    let app = create_router(test_state(test_config(url)));

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["upstream_configured"], true);
}
