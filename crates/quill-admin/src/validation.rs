//! Draft validation, run before any network call.

use quill_articles::ArticleDraft;

use crate::messages::Message;

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Draft rejected before submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title is required")]
    TitleRequired,

    #[error("content is required")]
    ContentRequired,

    #[error("title is {len} characters, maximum is {max}")]
    TitleTooLong { len: usize, max: usize },
}

impl ValidationError {
    /// Localizable message for this error.
    #[must_use]
    pub fn message(&self) -> Message {
        match self {
            Self::TitleRequired => Message::TitleRequired,
            Self::ContentRequired => Message::ContentRequired,
            Self::TitleTooLong { .. } => Message::TitleTooLong,
        }
    }
}

/// Validate form input and build the draft to submit.
///
/// Checks in order: blank title, blank content, title length. The length
/// is counted on the title as typed. The draft carries trimmed values.
///
/// # Errors
///
/// Returns the first [`ValidationError`] that applies.
pub fn validate(title: &str, content: &str) -> Result<ArticleDraft, ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if content.trim().is_empty() {
        return Err(ValidationError::ContentRequired);
    }
    let len = title.chars().count();
    if len > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong {
            len,
            max: MAX_TITLE_LEN,
        });
    }
    Ok(ArticleDraft::new(title.trim(), content.trim()))
}
