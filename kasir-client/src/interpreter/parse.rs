//! 模型回复解析与归一化
//!
//! 模型回复按约定是一个 JSON 对象，但契约只靠提示词约束，不靠 schema
//! 校验，所以这里全程宽松解析：去掉 markdown 代码栅栏，逐字段兜底，
//! 商品名归一化到菜单规范名。顶层 JSON 解析失败不是错误，而是返回
//! 固定的低置信度回退指令。

use serde_json::Value;

use shared::{CommandItem, InterpretedCommand, Intent, ItemAction, Menu};

const DEFAULT_VOICE_RESPONSE: &str = "Pesanan diproses";

/// Parse one textual model reply into a normalized command
pub fn parse_reply(content: &str, menu: &Menu) -> InterpretedCommand {
    let clean = strip_code_fences(content);

    let Ok(parsed) = serde_json::from_str::<Value>(&clean) else {
        tracing::warn!(reply = %content, "Model reply is not valid JSON, using fallback");
        return InterpretedCommand::unclear_fallback();
    };
    if !parsed.is_object() {
        tracing::warn!(reply = %content, "Model reply is not a JSON object, using fallback");
        return InterpretedCommand::unclear_fallback();
    }

    InterpretedCommand {
        intent: parse_intent(&parsed["intent"]),
        items: parse_items(&parsed["items"], menu),
        voice_response: parsed["voice_response"]
            .as_str()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_VOICE_RESPONSE)
            .to_string(),
        suggestion: parsed["suggestion"]
            .as_str()
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    }
}

/// Remove markdown code-fence wrapping the model sometimes emits
fn strip_code_fences(content: &str) -> String {
    content
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Unknown or missing intent strings fall through to `Unclear`
fn parse_intent(value: &Value) -> Intent {
    match value.as_str() {
        Some(s) => serde_json::from_value(Value::String(s.to_string())).unwrap_or_default(),
        None => Intent::Unclear,
    }
}

fn parse_items(value: &Value, menu: &Menu) -> Vec<CommandItem> {
    let Some(entries) = value.as_array() else {
        return vec![];
    };

    entries
        .iter()
        .map(|entry| CommandItem {
            action: parse_action(&entry["action"]),
            name: entry["name"].as_str().map(|n| menu.normalize(n)),
            quantity: parse_quantity(&entry["quantity"]),
        })
        .collect()
}

/// Missing action defaults to `add`
fn parse_action(value: &Value) -> ItemAction {
    match value.as_str() {
        Some("remove") => ItemAction::Remove,
        _ => ItemAction::Add,
    }
}

/// Coerce to a positive integer, defaulting to 1 when absent,
/// non-numeric, or non-positive
fn parse_quantity(value: &Value) -> i64 {
    let quantity = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    quantity.filter(|q| *q >= 1).unwrap_or(1)
}
