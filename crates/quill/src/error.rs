//! CLI error types.

use quill_admin::UnknownLocale;
use quill_articles::ArticlesError;
use quill_config::ConfigError;
use quill_renderer::{HighlightError, TabError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Articles(#[from] ArticlesError),

    #[error("{0}")]
    Highlight(#[from] HighlightError),

    #[error("{0}")]
    Tab(#[from] TabError),

    #[error("{0}")]
    Locale(#[from] UnknownLocale),

    /// Failure already phrased for the user.
    #[error("{0}")]
    Failed(String),

    #[error("{0}")]
    Validation(String),
}
