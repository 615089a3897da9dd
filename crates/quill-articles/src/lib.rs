//! Articles API access for Quill.
//!
//! This crate provides the [`Article`] data model, the [`ArticleStore`]
//! trait for CRUD access to the collection, and [`ArticlesClient`], its
//! HTTP implementation against the Articles REST API:
//!
//! | operation | request |
//! |---|---|
//! | list | `GET /articles` |
//! | get | `GET /articles/{id}` |
//! | create | `POST /articles` |
//! | update | `PUT /articles/{id}` |
//! | delete | `DELETE /articles/{id}` |
//!
//! `MockStore` (behind the `mock` feature flag) keeps articles in memory
//! for testing code that depends on [`ArticleStore`].
//!
//! # Example
//!
//! ```no_run
//! use quill_articles::{ArticleStore, ArticlesClient, DEFAULT_TIMEOUT};
//!
//! let client = ArticlesClient::new("http://localhost:8080/api", DEFAULT_TIMEOUT);
//! for article in client.list()? {
//!     println!("{}: {}", article.id, article.title);
//! }
//! # Ok::<(), quill_articles::ArticlesError>(())
//! ```

mod client;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod store;
mod types;

pub use client::{ArticlesClient, DEFAULT_TIMEOUT};
pub use error::ArticlesError;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MOCK_TIMESTAMP, MockStore, Operation};
pub use store::ArticleStore;
pub use types::{Article, ArticleDraft};
