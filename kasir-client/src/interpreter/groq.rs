//! Groq-backed interpreter
//!
//! 优先走凭证中继；中继返回 404 且客户端配置了密钥覆盖时，
//! 退回直连上游 (仅用于生产部署之外的开发场景)。每条语音恰好
//! 产生一次上游调用，无并发请求。

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{KasirError, KasirResult};
use crate::interpreter::{Interpreter, parse, prompt};
use shared::{CartLine, ChatRequest, ChatResponse, InterpretedCommand, Menu};

/// Interpreter calling the hosted chat model through the relay
#[derive(Debug, Clone)]
pub struct GroqInterpreter {
    config: ClientConfig,
    http: Client,
    menu: Menu,
}

impl GroqInterpreter {
    /// Create an interpreter over the default warung menu
    pub fn new(config: ClientConfig) -> Self {
        Self::with_menu(config, Menu::warung())
    }

    pub fn with_menu(config: ClientConfig, menu: Menu) -> Self {
        Self {
            config,
            http: Client::new(),
            menu,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Extract the upstream-provided error message, if the body carries one
    fn upstream_message(body: Option<Value>) -> Option<String> {
        let body = body?;
        body["error"]["message"]
            .as_str()
            .or_else(|| body["message"].as_str())
            .map(str::to_string)
    }
}

#[async_trait]
impl Interpreter for GroqInterpreter {
    async fn interpret(
        &self,
        utterance: &str,
        cart: &[CartLine],
    ) -> KasirResult<InterpretedCommand> {
        let system_prompt = prompt::build_system_prompt(&self.menu, cart);
        let request = ChatRequest::interpretation(system_prompt, utterance);

        // Relay first (production path)
        let mut response = self
            .http
            .post(&self.config.relay_url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        // Direct upstream fallback when the relay route does not exist,
        // development only
        if response.status() == StatusCode::NOT_FOUND {
            let api_key = self
                .config
                .direct_api_key
                .as_deref()
                .ok_or(KasirError::MissingCredential)?;
            tracing::debug!("Relay answered 404, falling back to direct upstream call");
            response = self
                .http
                .post(&self.config.direct_api_url)
                .bearer_auth(api_key)
                .header(header::CONTENT_TYPE, "application/json")
                .json(&request)
                .send()
                .await?;
        }

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().await.ok();
            return Err(KasirError::upstream(
                status.as_u16(),
                Self::upstream_message(body),
            ));
        }

        let chat: ChatResponse = response.json().await?;
        let content = chat.content().ok_or(KasirError::EmptyResponse)?;

        Ok(parse::parse_reply(content, &self.menu))
    }
}
