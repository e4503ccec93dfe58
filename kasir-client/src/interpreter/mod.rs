//! 语音指令解释器
//!
//! "意图分类器" 是一个外部的、非确定性的预言机 (托管语言模型)，
//! 不是进程内逻辑。所有调用方都通过 [`Interpreter`] 接口使用它，
//! 测试用确定性桩实现替换真实网络模型。

mod groq;
mod parse;
pub mod prompt;

use async_trait::async_trait;

use crate::error::KasirResult;
use shared::{CartLine, InterpretedCommand};

pub use groq::GroqInterpreter;
pub use parse::parse_reply;

/// Pluggable intent-classification capability
#[async_trait]
pub trait Interpreter: Send + Sync {
    /// Classify one utterance against the current cart snapshot
    ///
    /// Fails when no credential is configured or the upstream call fails
    /// after the relay fallback. Model-output malformation is NOT a
    /// failure: it resolves locally into the fixed unclear fallback.
    async fn interpret(
        &self,
        utterance: &str,
        cart: &[CartLine],
    ) -> KasirResult<InterpretedCommand>;
}
