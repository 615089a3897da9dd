//! Article list view state.

use std::borrow::Cow;

use quill_articles::{Article, ArticleStore, ArticlesError};
use tracing::{error, info};

use crate::messages::{Locale, Message, failure_message};

/// Characters of content shown in a list entry.
pub const EXCERPT_LEN: usize = 100;

/// Shorten `content` to `max` characters, marking the cut with `...`.
#[must_use]
pub fn excerpt(content: &str, max: usize) -> Cow<'_, str> {
    match content.char_indices().nth(max) {
        Some((end, _)) => Cow::Owned(format!("{}...", &content[..end])),
        None => Cow::Borrowed(content),
    }
}

/// The article collection as last loaded, plus the message of the last
/// failure.
///
/// This is the single source of truth for the list: it changes only on a
/// successful refresh or delete.
#[derive(Debug, Clone, Default)]
pub struct ArticleList {
    articles: Vec<Article>,
    error: Option<String>,
    locale: Locale,
}

impl ArticleList {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// Articles in server order.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Message to show when there is nothing to list.
    #[must_use]
    pub fn empty_message(&self) -> String {
        Message::NoArticles.text(self.locale)
    }

    /// Message from the last failed refresh or delete.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Reload the collection.
    ///
    /// On failure the previous articles stay in place and
    /// [`error`](Self::error) is set.
    pub fn refresh<S: ArticleStore + ?Sized>(&mut self, store: &S) -> Result<(), ArticlesError> {
        self.load(store.list())
    }

    /// Replace the collection with the articles whose title contains
    /// `keyword`. Failures behave as in [`refresh`](Self::refresh).
    pub fn search<S: ArticleStore + ?Sized>(
        &mut self,
        store: &S,
        keyword: &str,
    ) -> Result<(), ArticlesError> {
        self.load(store.search(keyword))
    }

    fn load(&mut self, result: Result<Vec<Article>, ArticlesError>) -> Result<(), ArticlesError> {
        self.error = None;
        match result {
            Ok(articles) => {
                info!("Loaded {} articles", articles.len());
                self.articles = articles;
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "Failed to load articles");
                self.error = Some(failure_message(&err, Message::LoadFailed, self.locale));
                Err(err)
            }
        }
    }

    /// Delete an article and remove it locally without reloading.
    ///
    /// An article the server no longer has counts as deleted.
    pub fn delete<S: ArticleStore + ?Sized>(
        &mut self,
        store: &S,
        id: i64,
    ) -> Result<(), ArticlesError> {
        self.error = None;
        match store.delete(id) {
            Ok(()) => {}
            Err(err) if err.is_not_found() => info!("Article {} was already deleted", id),
            Err(err) => {
                error!(error = %err, id, "Failed to delete article");
                self.error = Some(failure_message(&err, Message::DeleteFailed, self.locale));
                return Err(err);
            }
        }
        self.articles.retain(|a| a.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quill_articles::{MockStore, Operation};

    fn ids(list: &ArticleList) -> Vec<i64> {
        list.articles().iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_refresh_replaces_collection() {
        let store = MockStore::new().with_article(2, "b", "").with_article(1, "a", "");
        let mut list = ArticleList::new(Locale::En);
        assert!(list.is_empty());

        list.refresh(&store).unwrap();
        assert_eq!(ids(&list), [2, 1]);
        assert_eq!(list.get(1).unwrap().title, "a");
    }

    #[test]
    fn test_refresh_failure_keeps_prior_list() {
        let store = MockStore::new().with_article(1, "a", "");
        let mut list = ArticleList::new(Locale::Ja);
        list.refresh(&store).unwrap();

        store.fail(Operation::List, 503, None);
        assert!(list.refresh(&store).is_err());
        assert_eq!(ids(&list), [1]);
        assert_eq!(list.error(), Some("記事の取得に失敗しました"));

        store.clear_failures();
        list.refresh(&store).unwrap();
        assert_eq!(list.error(), None);
    }

    #[test]
    fn test_search_narrows_and_refresh_restores() {
        let store = MockStore::new()
            .with_article(1, "Rust tips", "")
            .with_article(2, "Go notes", "");
        let mut list = ArticleList::new(Locale::En);

        list.search(&store, "Rust").unwrap();
        assert_eq!(ids(&list), [1]);

        list.refresh(&store).unwrap();
        assert_eq!(ids(&list), [1, 2]);
    }

    #[test]
    fn test_search_failure_keeps_prior_list() {
        let store = MockStore::new()
            .with_article(1, "a", "")
            .with_failure(Operation::Search, 500, None);
        let mut list = ArticleList::new(Locale::En);
        list.refresh(&store).unwrap();

        assert!(list.search(&store, "a").is_err());
        assert_eq!(ids(&list), [1]);
        assert_eq!(list.error(), Some("Failed to load articles"));
    }

    #[test]
    fn test_delete_success_clears_previous_error() {
        let store = MockStore::new()
            .with_article(1, "a", "")
            .with_failure(Operation::Delete, 500, Some("locked"));
        let mut list = ArticleList::new(Locale::En);
        list.refresh(&store).unwrap();
        assert!(list.delete(&store, 1).is_err());

        store.clear_failures();
        list.delete(&store, 1).unwrap();
        assert_eq!(list.error(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_delete_removes_locally_without_refetch() {
        let store = MockStore::new().with_article(1, "a", "").with_article(2, "b", "");
        let mut list = ArticleList::new(Locale::En);
        list.refresh(&store).unwrap();

        list.delete(&store, 1).unwrap();

        assert_eq!(ids(&list), [2]);
        assert_eq!(store.calls(), [Operation::List, Operation::Delete]);
    }

    #[test]
    fn test_delete_not_found_is_success() {
        let store = MockStore::new().with_article(1, "a", "");
        let mut list = ArticleList::new(Locale::En);
        list.refresh(&store).unwrap();
        store.delete(1).unwrap();

        list.delete(&store, 1).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.error(), None);
    }

    #[test]
    fn test_delete_failure_keeps_article() {
        let store = MockStore::new()
            .with_article(1, "a", "")
            .with_failure(Operation::Delete, 500, Some("locked"));
        let mut list = ArticleList::new(Locale::En);
        list.refresh(&store).unwrap();

        assert!(list.delete(&store, 1).is_err());
        assert_eq!(ids(&list), [1]);
        assert_eq!(list.error(), Some("locked"));
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("short", EXCERPT_LEN), "short");
        let long = "あ".repeat(EXCERPT_LEN + 5);
        let cut = excerpt(&long, EXCERPT_LEN);
        assert_eq!(cut.chars().count(), EXCERPT_LEN + 3);
        assert!(cut.ends_with("あ..."));
        assert_eq!(excerpt(&"a".repeat(EXCERPT_LEN), EXCERPT_LEN).len(), EXCERPT_LEN);
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(
            ArticleList::new(Locale::En).empty_message(),
            "No articles yet. Create the first one!"
        );
    }
}
