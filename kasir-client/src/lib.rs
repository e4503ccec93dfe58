//! Kasir Client - 语音点单会话端
//!
//! Order interpretation and session state for the Warung voice POS:
//!
//! - **解释器** (`interpreter`): 渲染系统提示词，经中继调用聊天模型，
//!   把模型回复归一化为 [`shared::InterpretedCommand`]
//! - **会话** (`session`): 购物车、结账、交易历史、设置，
//!   持久化通过注入的 [`session::StateStore`] 端口完成
//! - **报表** (`report`): CSV 导出和当日汇总

pub mod config;
pub mod error;
pub mod interpreter;
pub mod report;
pub mod session;

pub use config::ClientConfig;
pub use error::{KasirError, KasirResult};
pub use interpreter::{GroqInterpreter, Interpreter};
pub use session::{Applied, AppliedResponse, MemoryStore, RedbStore, Session, StateStore};

// Re-export shared types for convenience
pub use shared::{CartLine, InterpretedCommand, Intent, Menu, Settings, Transaction};
