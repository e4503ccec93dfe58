//! 语音指令契约 - 模型输出的规范形式
//!
//! [`InterpretedCommand`] 是解释器对每条语音的输出，按次生成，不持久化。

use serde::{Deserialize, Serialize};

/// Purpose classification of one utterance
///
/// Pure per-call dispatch label, not a session state. Unknown or missing
/// intent strings decode to [`Intent::Unclear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    AddItem,
    RemoveItem,
    ClearCart,
    Checkout,
    Query,
    Greeting,
    RefusePay,
    OutOfContext,
    #[default]
    #[serde(other)]
    Unclear,
}

/// Cart mutation direction for one command item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemAction {
    #[default]
    Add,
    Remove,
}

/// One item entry of an interpreted command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandItem {
    pub action: ItemAction,
    /// Canonical product name after normalization, or the model's raw
    /// string when no menu item matched (treated as unknown by appliers)
    pub name: Option<String>,
    /// Always >= 1 after coercion
    pub quantity: i64,
}

impl CommandItem {
    pub fn add(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            action: ItemAction::Add,
            name: Some(name.into()),
            quantity,
        }
    }

    pub fn remove(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            action: ItemAction::Remove,
            name: Some(name.into()),
            quantity,
        }
    }
}

/// Canonical interpreter output for one utterance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpretedCommand {
    pub intent: Intent,
    pub items: Vec<CommandItem>,
    /// Friendly Indonesian response for TTS/display
    pub voice_response: String,
    pub suggestion: Option<String>,
}

impl InterpretedCommand {
    /// Fixed low-confidence fallback, returned when the model reply is
    /// not valid JSON after fence stripping. Local recovery, never an error.
    pub fn unclear_fallback() -> Self {
        Self {
            intent: Intent::Unclear,
            items: vec![],
            voice_response: "Maaf, saya tidak mengerti. Coba ulangi pesanan Anda.".to_string(),
            suggestion: None,
        }
    }
}
