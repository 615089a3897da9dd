//! CRUD operations on the `articles` resource.

use tracing::info;

use super::{ArticlesClient, check_status, read_json};
use crate::error::ArticlesError;
use crate::store::ArticleStore;
use crate::types::{Article, ArticleDraft};

impl ArticleStore for ArticlesClient {
    fn list(&self) -> Result<Vec<Article>, ArticlesError> {
        let url = self.articles_url();
        info!("Listing articles from {}", url);

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()?;

        let articles: Vec<Article> = read_json(check_status(response)?)?;
        info!("Received {} articles", articles.len());
        Ok(articles)
    }

    fn search(&self, keyword: &str) -> Result<Vec<Article>, ArticlesError> {
        let url = self.search_url();
        let keyword = keyword.trim();
        info!("Searching articles for '{}'", keyword);

        let response = self
            .agent
            .get(&url)
            .query("keyword", keyword)
            .header("Accept", "application/json")
            .call()?;

        let articles: Vec<Article> = read_json(check_status(response)?)?;
        info!("Found {} articles", articles.len());
        Ok(articles)
    }

    fn get(&self, id: i64) -> Result<Article, ArticlesError> {
        let url = self.article_url(id);
        info!("Getting article {}", id);

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()?;

        read_json(check_status(response)?)
    }

    fn create(&self, draft: &ArticleDraft) -> Result<Article, ArticlesError> {
        let url = self.articles_url();
        info!("Creating article '{}'", draft.title);

        let response = self
            .agent
            .post(&url)
            .header("Accept", "application/json")
            .send_json(draft)?;

        let article: Article = read_json(check_status(response)?)?;
        info!("Created article {}", article.id);
        Ok(article)
    }

    fn update(&self, id: i64, draft: &ArticleDraft) -> Result<Article, ArticlesError> {
        let url = self.article_url(id);
        info!("Updating article {} ('{}')", id, draft.title);

        let response = self
            .agent
            .put(&url)
            .header("Accept", "application/json")
            .send_json(draft)?;

        read_json(check_status(response)?)
    }

    fn delete(&self, id: i64) -> Result<(), ArticlesError> {
        let url = self.article_url(id);
        info!("Deleting article {}", id);

        let response = self
            .agent
            .delete(&url)
            .header("Accept", "application/json")
            .call()?;

        // The success body is a confirmation message with nothing to keep.
        check_status(response)?;
        Ok(())
    }
}
