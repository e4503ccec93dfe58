//! Relay handler
//!
//! 上游契约：请求体原样转发，仅追加 `Authorization` 与 `Content-Type`；
//! 上游的 JSON 响应体和状态码不做任何改写透传回调用方。

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::Validate;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::ChatRequest;

/// `{"error": "..."}` 响应 - 与原始中继的故障契约保持一致
fn relay_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Forward a chat-completion request to the upstream API
///
/// 入站校验:
/// 1. 配置了 RELAY_AUTH_TOKEN 时要求 `Authorization: Bearer <token>`
/// 2. 请求体必须是合法的聊天补全形状 (model 非空、至少一条 message)
pub async fn forward(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(payload): Json<ChatRequest>,
) -> AppResult<Response> {
    // Inbound auth, only when a token is configured
    if let Some(expected) = &state.config.relay_auth_token {
        let authorized = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .is_some_and(|t| t == expected);
        if !authorized {
            return Err(AppError::Unauthorized);
        }
    }

    // Payload shape validation
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    // Configuration error: credential missing
    let Some(api_key) = state.config.groq_api_key.as_deref() else {
        tracing::error!("Relay request rejected: GROQ_API_KEY is not configured");
        return Ok(relay_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "GROQ_API_KEY is not configured",
        ));
    };

    // Forward verbatim with the server-held credential attached
    let upstream = state
        .http
        .post(&state.config.groq_api_url)
        .bearer_auth(api_key)
        .header(header::CONTENT_TYPE, "application/json")
        .json(&payload)
        .send()
        .await;

    let response = match upstream {
        Ok(r) => r,
        Err(e) => {
            // Transport failure: surface a generic internal error,
            // keep the raw error for operator visibility
            tracing::error!(error = %e, "Upstream transport failure");
            return Ok(relay_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            ));
        }
    };

    // Pass through the upstream status and body unmodified,
    // success and upstream-error alike
    let status = response.status();
    match response.bytes().await {
        Ok(body) => Ok((
            status,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response()),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read upstream response body");
            Ok(relay_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            ))
        }
    }
}
