/// 服务器配置 - 中继节点的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3001 | HTTP 服务端口 |
/// | GROQ_API_KEY | (无) | 上游聊天 API 凭证，缺失时中继返回 500 |
/// | GROQ_API_URL | https://api.groq.com/openai/v1/chat/completions | 上游聊天补全端点 |
/// | RELAY_AUTH_TOKEN | (无) | 中继入站 Bearer 令牌，未设置时中继开放 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// GROQ_API_KEY=gsk_xxx HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 上游聊天 API 凭证，启动时读取一次
    pub groq_api_key: Option<String>,
    /// 上游聊天补全端点
    pub groq_api_url: String,
    /// 入站 Bearer 令牌。`None` 表示开放中继 (与原始部署一致，仅建议开发环境)
    pub relay_auth_token: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            groq_api_key: std::env::var("GROQ_API_KEY").ok().filter(|k| !k.is_empty()),
            groq_api_url: std::env::var("GROQ_API_URL")
                .unwrap_or_else(|_| DEFAULT_GROQ_API_URL.into()),
            relay_auth_token: std::env::var("RELAY_AUTH_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
