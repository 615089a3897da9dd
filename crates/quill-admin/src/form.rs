//! Create/edit article form.

use quill_articles::{Article, ArticleStore, ArticlesError};
use tracing::{info, warn};

use crate::messages::{Locale, Message, failure_message};
use crate::validation::{ValidationError, validate};

/// Error from submitting the form.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The input was rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The API call failed.
    #[error("failed to save article")]
    Api(#[from] ArticlesError),

    /// There is no open form to submit.
    #[error("no article form is open")]
    NoForm,
}

/// Whether the form creates a new article or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// Form state for creating or editing an article.
#[derive(Debug, Clone)]
pub struct ArticleForm {
    mode: FormMode,
    title: String,
    content: String,
    error: Option<String>,
    locale: Locale,
}

impl ArticleForm {
    /// Empty form for a new article.
    #[must_use]
    pub fn create(locale: Locale) -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            content: String::new(),
            error: None,
            locale,
        }
    }

    /// Form prefilled with an existing article.
    #[must_use]
    pub fn edit(article: &Article, locale: Locale) -> Self {
        Self {
            mode: FormMode::Edit(article.id),
            title: article.title.clone(),
            content: article.content.clone(),
            error: None,
            locale,
        }
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    #[must_use]
    pub fn heading(&self) -> String {
        match self.mode {
            FormMode::Create => Message::NewArticle.text(self.locale),
            FormMode::Edit(_) => Message::EditArticle.text(self.locale),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Title length in characters, for the `n/200` counter.
    #[must_use]
    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Message from the last failed submit.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate, then create or update the article.
    ///
    /// On success the fields are cleared. On failure the fields keep what
    /// was typed and [`error`](Self::error) holds the message to show.
    pub fn submit<S: ArticleStore + ?Sized>(&mut self, store: &S) -> Result<Article, SubmitError> {
        let draft = match validate(&self.title, &self.content) {
            Ok(draft) => draft,
            Err(err) => {
                self.error = Some(err.message().text(self.locale));
                return Err(err.into());
            }
        };
        self.error = None;

        let (result, fallback) = match self.mode {
            FormMode::Create => (store.create(&draft), Message::CreateFailed),
            FormMode::Edit(id) => (store.update(id, &draft), Message::UpdateFailed),
        };

        match result {
            Ok(article) => {
                info!("Saved article {}", article.id);
                self.title.clear();
                self.content.clear();
                Ok(article)
            }
            Err(err) => {
                warn!(error = %err, "Failed to save article");
                self.error = Some(failure_message(&err, fallback, self.locale));
                Err(err.into())
            }
        }
    }

    /// Discard input and any error.
    pub fn cancel(&mut self) {
        self.title.clear();
        self.content.clear();
        self.error = None;
    }
}
