//! Admin session: the article list plus at most one open form.

use quill_articles::{Article, ArticleStore, ArticlesError};
use tracing::debug;

use crate::form::{ArticleForm, FormMode, SubmitError};
use crate::list::ArticleList;
use crate::messages::Locale;

/// Admin view state over an [`ArticleStore`].
///
/// Every mutating call is followed by an explicit list update: a refresh
/// after saving, a local removal after deleting.
pub struct AdminSession<S: ArticleStore> {
    store: S,
    list: ArticleList,
    form: Option<ArticleForm>,
    locale: Locale,
}

impl<S: ArticleStore> AdminSession<S> {
    #[must_use]
    pub fn new(store: S, locale: Locale) -> Self {
        Self {
            store,
            list: ArticleList::new(locale),
            form: None,
            locale,
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn list(&self) -> &ArticleList {
        &self.list
    }

    #[must_use]
    pub fn form(&self) -> Option<&ArticleForm> {
        self.form.as_ref()
    }

    /// Load the article list.
    pub fn refresh(&mut self) -> Result<(), ArticlesError> {
        self.list.refresh(&self.store)
    }

    /// Open an empty form, replacing any open one.
    pub fn start_create(&mut self) -> &mut ArticleForm {
        self.form.insert(ArticleForm::create(self.locale))
    }

    /// Open a form for a listed article. Returns `None` if the article is
    /// not in the list.
    pub fn start_edit(&mut self, id: i64) -> Option<&mut ArticleForm> {
        let article = self.list.get(id)?;
        let form = ArticleForm::edit(article, self.locale);
        Some(self.form.insert(form))
    }

    /// Submit the open form. On success the form closes and the list is
    /// refreshed; a failed refresh is reported through the list's error.
    pub fn save(&mut self) -> Result<Article, SubmitError> {
        let form = self.form.as_mut().ok_or(SubmitError::NoForm)?;
        let article = form.submit(&self.store)?;
        self.form = None;

        if self.list.refresh(&self.store).is_err() {
            debug!("List refresh after save failed");
        }
        Ok(article)
    }

    /// Close the form, discarding its input.
    pub fn cancel(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.cancel();
        }
        self.form = None;
    }

    /// Delete an article. A form editing it is closed.
    pub fn delete(&mut self, id: i64) -> Result<(), ArticlesError> {
        self.list.delete(&self.store, id)?;
        if self
            .form
            .as_ref()
            .is_some_and(|form| form.mode() == FormMode::Edit(id))
        {
            self.form = None;
        }
        Ok(())
    }
}
