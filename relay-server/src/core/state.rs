use std::sync::Arc;

use crate::core::Config;

/// 服务器状态 - 持有配置和共享 HTTP 客户端
///
/// 所有字段都是廉价克隆的句柄，handler 之间共享同一个
/// `reqwest::Client` 连接池。
#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    /// Shared upstream HTTP client. No timeout override: the relay
    /// inherits the transport defaults by contract.
    pub http: reqwest::Client,
}

impl ServerState {
    pub fn new(config: &Config) -> Self {
        if config.groq_api_key.is_none() {
            tracing::warn!("GROQ_API_KEY not set - relay requests will fail with 500");
        }
        if config.relay_auth_token.is_none() && config.is_production() {
            tracing::warn!("RELAY_AUTH_TOKEN not set in production - relay is open to any caller");
        }

        Self {
            config: Arc::new(config.clone()),
            http: reqwest::Client::new(),
        }
    }
}
