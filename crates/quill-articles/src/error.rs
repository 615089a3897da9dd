//! Error types for the Articles API.

/// Error from Articles API operations.
#[derive(Debug, thiserror::Error)]
pub enum ArticlesError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// Server returned an error status.
    #[error("API error: {status}{}", .message.as_deref().map(|m| format!(" - {m}")).unwrap_or_default())]
    Api {
        /// HTTP status code.
        status: u16,
        /// The `error` field of the response body, if there was one.
        message: Option<String>,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

impl ArticlesError {
    /// Whether the server answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Message supplied by the server, meant to be shown verbatim.
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            Self::HttpRequest(_) | Self::Json(_) => None,
        }
    }
}
