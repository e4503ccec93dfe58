//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`relay`] - 凭证中继 (聊天补全转发)

pub mod health;
pub mod relay;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
