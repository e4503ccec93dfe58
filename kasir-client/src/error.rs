//! Client error types

use thiserror::Error;

use crate::session::StorageError;

/// Kasir client error type
#[derive(Debug, Error)]
pub enum KasirError {
    /// No credential is configured for the direct upstream fallback
    #[error("API Key tidak tersedia")]
    MissingCredential,

    /// Non-success HTTP status from the chat API, message relayed verbatim
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// Network failure reaching the relay or upstream
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream reply carried no message content
    #[error("Empty response from AI")]
    EmptyResponse,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local storage error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl KasirError {
    /// Upstream error with the upstream-provided message, or the generic
    /// `API Error: <status>` when the body carried none
    pub fn upstream(status: u16, message: Option<String>) -> Self {
        Self::Upstream {
            status,
            message: message.unwrap_or_else(|| format!("API Error: {status}")),
        }
    }
}

/// Result type for kasir client operations
pub type KasirResult<T> = Result<T, KasirError>;
