use thiserror::Error;

/// Failures talking to the storefront backend.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Rejected by backend: {0}")]
    Rejected(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    /// Text suitable for a toast; falls back to `fallback` when the backend
    /// sent nothing readable.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            GatewayError::Forbidden(message)
            | GatewayError::Rejected(message)
            | GatewayError::Backend(message)
                if !message.trim().is_empty() =>
            {
                message.clone()
            }
            GatewayError::Unauthorized => "Your session has expired".to_string(),
            GatewayError::NotFound => "Not found".to_string(),
            _ => fallback.to_string(),
        }
    }
}
