//! Warung Relay Server - 语音点单系统的凭证中继节点
//!
//! # 架构概述
//!
//! 本模块是 Relay Server 的主入口，提供以下核心功能：
//!
//! - **凭证中继** (`api/relay`): 注入服务端密钥后原样转发聊天补全请求
//! - **健康检查** (`api/health`): 运维可见性
//!
//! # 模块结构
//!
//! ```text
//! relay-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误类型、日志
//! ```

pub mod api;
pub mod core;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState, create_router};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env and initialize logging. Call once before anything else.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
 _       __
| |     / /___ _______  ______  ____ _
| | /| / / __ `/ ___/ / / / __ \/ __ `/
| |/ |/ / /_/ / /  / /_/ / / / / /_/ /
|__/|__/\__,_/_/   \__,_/_/ /_/\__, /
    Relay                     /____/
    "#
    );
}
