//! Generates the sitemap of Le Choix de Clara.
//!
//! The articles are listed from the site's Firestore collection and rendered,
//! together with the static pages, to a `sitemap.xml` file.

pub mod config;
pub mod date;
pub mod firestore;
mod permalink;
pub mod sitemap;
pub mod storage;

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

pub use config::Config;
pub use firestore::{ArticleDescriptor, FirestoreClient};
pub use permalink::Permalink;
use sitemap::{render_sitemap, sitemap_entries};
use storage::Store;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to store '{path}': {message}")]
    Storage { path: PathBuf, message: String },
}

#[derive(Debug, PartialEq, Eq)]
pub struct GenerateReport {
    pub article_count: usize,
    pub url_count: usize,
    pub output_path: PathBuf,
}

/// Lists the articles and renders the sitemap to `storage`.
///
/// The article listing never fails; only storing the sitemap can.
pub async fn generate(
    config: &Config,
    client: &FirestoreClient,
    storage: &impl Store,
    today: NaiveDate,
) -> Result<GenerateReport, GenerateError> {
    let articles = client.list_articles().await;

    render_to(config, &articles, storage, today)
}

/// Renders the sitemap for an already-fetched list of articles to `storage`.
pub fn render_to(
    config: &Config,
    articles: &[ArticleDescriptor],
    storage: &impl Store,
    today: NaiveDate,
) -> Result<GenerateReport, GenerateError> {
    let entries = sitemap_entries(&config.site, articles, today);
    let sitemap_xml = render_sitemap(&entries);

    debug!(urls = entries.len(), path = %config.output_path.display(), "storing sitemap");

    storage
        .store_sitemap(&config.output_path, &sitemap_xml)
        .map_err(|err| GenerateError::Storage {
            path: config.output_path.clone(),
            message: err.to_string(),
        })?;

    Ok(GenerateReport {
        article_count: articles.len(),
        url_count: entries.len(),
        output_path: config.output_path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::storage::InMemoryStorage;

    #[test]
    fn test_render_to_storage() {
        let config = Config::default();
        let storage = InMemoryStorage::default();
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

        let report = render_to(
            &config,
            &[ArticleDescriptor::from_document_name("articles/abc123")],
            &storage,
            today,
        )
        .unwrap();

        assert_eq!(
            report,
            GenerateReport {
                article_count: 1,
                url_count: 3,
                output_path: PathBuf::from("sitemap.xml"),
            }
        );

        let xml = storage.get("sitemap.xml").unwrap();
        assert!(xml.contains("<loc>https://lechoixdeclara.fr/?a=abc123</loc>"));
    }
}
