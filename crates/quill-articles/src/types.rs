//! Articles API types.

use serde::{Deserialize, Serialize};

/// A blog article as stored by the Articles API.
///
/// Timestamps are kept as the server's text; they are only displayed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Server-assigned identifier.
    pub id: i64,
    /// Article title (at most 200 characters).
    pub title: String,
    /// Markdown content.
    pub content: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

/// Request body for creating or updating an article.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
}

impl ArticleDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Error body returned with non-2xx responses.
///
/// Only the `error` field is used; other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
