//! 凭证中继路由
//!
//! 单一透传端点：注入服务端 Bearer 凭证后将聊天补全请求原样转发上游。
//! 无重试、无限流、无超时覆盖，失败立即回传调用方。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// 中继路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/groq", post(handler::forward))
}
