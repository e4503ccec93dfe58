//! Chat-completion wire types
//!
//! Upstream-shaped request/response payloads. The relay validates the
//! request shape before forwarding; unknown sampling parameters are
//! preserved through `extra` so the forwarded body stays byte-equivalent
//! in meaning to what the client sent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// One message of the two-message system/user exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// `response_format` object (`{"type": "json_object"}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

impl ResponseFormat {
    pub fn json_object() -> Self {
        Self {
            format_type: "json_object".to_string(),
        }
    }
}

/// Chat-completion request body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "model must not be empty"))]
    pub model: String,
    #[validate(length(min = 1, message = "messages must not be empty"))]
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
    /// Any further upstream parameters, forwarded untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatRequest {
    /// Request shape used by the order interpreter
    pub fn interpretation(system_prompt: String, utterance: &str) -> Self {
        Self {
            model: "llama-3.1-8b-instant".to_string(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(utterance),
            ],
            temperature: Some(0.1),
            max_tokens: Some(300),
            response_format: Some(ResponseFormat::json_object()),
            extra: Map::new(),
        }
    }
}

/// Chat-completion response body (the subset we consume)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// `choices[0].message.content`, if present and non-empty
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|c| !c.is_empty())
    }
}
