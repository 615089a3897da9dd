//! Article store abstraction.

use crate::error::ArticlesError;
use crate::types::{Article, ArticleDraft};

/// CRUD access to the article collection.
///
/// Implemented by [`ArticlesClient`](crate::ArticlesClient) over HTTP and by
/// `MockStore` (behind the `mock` feature) for tests.
pub trait ArticleStore: Send + Sync {
    /// List all articles in server order.
    ///
    /// # Errors
    ///
    /// Returns [`ArticlesError`] if the request fails or the server answers
    /// with an error status.
    fn list(&self) -> Result<Vec<Article>, ArticlesError>;

    /// Articles whose title contains `keyword`.
    ///
    /// The keyword is trimmed; a blank keyword matches every article.
    fn search(&self, keyword: &str) -> Result<Vec<Article>, ArticlesError>;

    /// Fetch one article.
    ///
    /// # Errors
    ///
    /// Returns [`ArticlesError::Api`] with status 404 if the article does not
    /// exist.
    fn get(&self, id: i64) -> Result<Article, ArticlesError>;

    /// Create an article. The server assigns id and timestamps.
    fn create(&self, draft: &ArticleDraft) -> Result<Article, ArticlesError>;

    /// Replace title and content of an article.
    fn update(&self, id: i64, draft: &ArticleDraft) -> Result<Article, ArticlesError>;

    /// Delete an article.
    fn delete(&self, id: i64) -> Result<(), ArticlesError>;
}
