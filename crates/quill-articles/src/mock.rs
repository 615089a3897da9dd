//! Mock article store for testing.
//!
//! Provides [`MockStore`] for testing view state without an API server.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::ArticlesError;
use crate::store::ArticleStore;
use crate::types::{Article, ArticleDraft};

/// Timestamp given to every article the mock creates or updates.
pub const MOCK_TIMESTAMP: &str = "2025-01-01T00:00:00";

/// Store operation, used to inject failures and inspect calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Search,
    Get,
    Create,
    Update,
    Delete,
}

/// In-memory article store.
///
/// Behaves like the Articles API: ids are assigned on create, missing ids
/// answer 404. Use the builder methods to seed articles and inject
/// failures.
///
/// # Example
///
/// ```ignore
/// use quill_articles::{ArticleStore, MockStore, Operation};
///
/// let store = MockStore::new()
///     .with_article(1, "Hello", "# Hello")
///     .with_failure(Operation::Create, 400, Some("title required"));
///
/// assert_eq!(store.list().unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockStore {
    articles: RwLock<Vec<Article>>,
    failures: RwLock<HashMap<Operation, (u16, Option<String>)>>,
    calls: RwLock<Vec<Operation>>,
}

impl MockStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an article.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_article(self, id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.articles.write().unwrap().push(Article {
            id,
            title: title.into(),
            content: content.into(),
            created_at: MOCK_TIMESTAMP.to_owned(),
            updated_at: MOCK_TIMESTAMP.to_owned(),
        });
        self
    }

    /// Make `operation` fail with an API error.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(self, operation: Operation, status: u16, message: Option<&str>) -> Self {
        self.fail(operation, status, message);
        self
    }

    /// Make `operation` fail from now on.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn fail(&self, operation: Operation, status: u16, message: Option<&str>) {
        self.failures
            .write()
            .unwrap()
            .insert(operation, (status, message.map(str::to_owned)));
    }

    /// Remove all injected failures.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn clear_failures(&self) {
        self.failures.write().unwrap().clear();
    }

    /// Snapshot of the stored articles.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn articles(&self) -> Vec<Article> {
        self.articles.read().unwrap().clone()
    }

    /// Operations called so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<Operation> {
        self.calls.read().unwrap().clone()
    }

    /// Record the call and return the injected failure, if any.
    fn enter(&self, operation: Operation) -> Result<(), ArticlesError> {
        self.calls.write().unwrap().push(operation);
        match self.failures.read().unwrap().get(&operation) {
            Some((status, message)) => Err(ArticlesError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn not_found() -> ArticlesError {
    ArticlesError::Api {
        status: 404,
        message: None,
    }
}

impl ArticleStore for MockStore {
    fn list(&self) -> Result<Vec<Article>, ArticlesError> {
        self.enter(Operation::List)?;
        Ok(self.articles())
    }

    fn search(&self, keyword: &str) -> Result<Vec<Article>, ArticlesError> {
        self.enter(Operation::Search)?;
        let keyword = keyword.trim();
        Ok(self
            .articles()
            .into_iter()
            .filter(|a| a.title.contains(keyword))
            .collect())
    }

    fn get(&self, id: i64) -> Result<Article, ArticlesError> {
        self.enter(Operation::Get)?;
        self.articles
            .read()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    fn create(&self, draft: &ArticleDraft) -> Result<Article, ArticlesError> {
        self.enter(Operation::Create)?;
        let mut articles = self.articles.write().unwrap();
        let id = articles.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let article = Article {
            id,
            title: draft.title.clone(),
            content: draft.content.clone(),
            created_at: MOCK_TIMESTAMP.to_owned(),
            updated_at: MOCK_TIMESTAMP.to_owned(),
        };
        articles.push(article.clone());
        Ok(article)
    }

    fn update(&self, id: i64, draft: &ArticleDraft) -> Result<Article, ArticlesError> {
        self.enter(Operation::Update)?;
        let mut articles = self.articles.write().unwrap();
        let article = articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(not_found)?;
        article.title.clone_from(&draft.title);
        article.content.clone_from(&draft.content);
        article.updated_at = MOCK_TIMESTAMP.to_owned();
        Ok(article.clone())
    }

    fn delete(&self, id: i64) -> Result<(), ArticlesError> {
        self.enter(Operation::Delete)?;
        let mut articles = self.articles.write().unwrap();
        let before = articles.len();
        articles.retain(|a| a.id != id);
        if articles.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}
