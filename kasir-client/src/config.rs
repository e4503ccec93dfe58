//! Client configuration

/// Configuration for the Groq-backed interpreter
///
/// The relay is tried first; the direct upstream URL is only used as a
/// development fallback when the relay answers 404 and a client-side
/// credential override is available.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Relay endpoint (the server-side credential injector)
    pub relay_url: String,
    /// Upstream chat-completion endpoint for the direct fallback
    pub direct_api_url: String,
    /// Client-side credential override. `None` means the direct
    /// fallback is unavailable and only the relay can be used.
    pub direct_api_key: Option<String>,
}

impl ClientConfig {
    pub fn new(relay_url: impl Into<String>) -> Self {
        Self {
            relay_url: relay_url.into(),
            ..Self::default()
        }
    }

    /// Set the client-side credential override
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.direct_api_key = Some(key.into());
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            relay_url: "http://localhost:3001/api/groq".to_string(),
            direct_api_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            direct_api_key: None,
        }
    }
}
