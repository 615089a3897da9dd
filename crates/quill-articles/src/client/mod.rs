//! Articles REST API client.
//!
//! Sync HTTP client for the `articles` resource. Error statuses are read as
//! responses, not transport errors, so the server's `error` message can be
//! passed on.

mod articles;

use std::time::Duration;

use serde::de::DeserializeOwned;
use ureq::Agent;
use ureq::http::Response;

use crate::error::ArticlesError;
use crate::types::ErrorBody;

/// Default HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Articles REST API client.
pub struct ArticlesClient {
    agent: Agent,
    base_url: String,
}

impl ArticlesClient {
    /// Create a client for the API rooted at `base_url`
    /// (e.g. `http://localhost:8080/api`).
    ///
    /// `timeout` bounds each whole request.
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// API base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn articles_url(&self) -> String {
        format!("{}/articles", self.base_url)
    }

    fn search_url(&self) -> String {
        format!("{}/articles/search", self.base_url)
    }

    fn article_url(&self, id: i64) -> String {
        format!("{}/articles/{id}", self.base_url)
    }
}

/// Turn an error status into [`ArticlesError::Api`], keeping the body's
/// `error` field when it has one.
fn check_status(response: Response<ureq::Body>) -> Result<ureq::Body, ArticlesError> {
    let status = response.status();
    let mut body = response.into_body();

    if !status.is_success() {
        let message = body
            .read_to_string()
            .ok()
            .and_then(|text| serde_json::from_str::<ErrorBody>(&text).ok())
            .and_then(|parsed| parsed.error)
            .filter(|message| !message.is_empty());
        return Err(ArticlesError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(body)
}

/// Decode a success body.
fn read_json<T: DeserializeOwned>(body: ureq::Body) -> Result<T, ArticlesError> {
    Ok(serde_json::from_reader(body.into_reader())?)
}
