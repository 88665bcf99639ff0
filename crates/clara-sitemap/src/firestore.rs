//! Fetching the article list from the Firestore REST API.
//!
//! A listing looks like this (only `name` is read):
//!
//! ```json
//! {
//!   "documents": [
//!     {
//!       "name": "projects/p/databases/(default)/documents/articles/abc123",
//!       "fields": { ... },
//!       "createTime": "...",
//!       "updateTime": "..."
//!     }
//!   ]
//! }
//! ```

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{ConfigError, FirestoreConfig};

/// An article stored in the remote collection.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct ArticleDescriptor {
    pub id: String,
}

impl ArticleDescriptor {
    /// Derives the article from the fully-qualified document name, whose last
    /// path segment is the document ID.
    pub fn from_document_name(name: &str) -> Self {
        let id = name.rsplit('/').next().unwrap_or_default();

        Self { id: id.to_string() }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
}

#[derive(Debug, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub name: String,
}

impl ListDocumentsResponse {
    pub fn into_articles(self) -> Vec<ArticleDescriptor> {
        self.documents
            .iter()
            .map(|document| ArticleDescriptor::from_document_name(&document.name))
            .collect()
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid endpoint: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status: {status}")]
    Status { status: StatusCode },

    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub struct FirestoreClient {
    http: reqwest::Client,
    config: FirestoreConfig,
}

impl FirestoreClient {
    pub fn new(config: FirestoreConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    pub fn with_http_client(config: FirestoreConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    /// Lists the articles in the collection with a single GET request.
    pub async fn try_list_articles(&self) -> Result<Vec<ArticleDescriptor>, FetchError> {
        let url = self.config.documents_url()?;
        debug!(%url, "listing documents");

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status { status });
        }

        let body = response.bytes().await?;
        let listing: ListDocumentsResponse = serde_json::from_slice(&body)?;

        debug!(count = listing.documents.len(), "received documents");

        Ok(listing.into_articles())
    }

    /// Lists the articles in the collection.
    ///
    /// Any failure yields an empty list so that the sitemap still gets its static pages.
    pub async fn list_articles(&self) -> Vec<ArticleDescriptor> {
        match self.try_list_articles().await {
            Ok(articles) => articles,
            Err(err) => {
                warn!("failed to list articles, continuing without them: {err}");
                Vec::new()
            }
        }
    }
}
