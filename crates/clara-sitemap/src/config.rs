use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// The public site the sitemap describes.
pub const BASE_URL: &str = "https://lechoixdeclara.fr";

/// The root of the Firestore REST API.
pub const FIRESTORE_API_BASE: &str = "https://firestore.googleapis.com";

/// The Firebase project holding the article collection.
pub const PROJECT_ID: &str = "le-choix-de-clara";

/// The path of the article collection within the project's default database.
pub const COLLECTION_PATH: &str = "artifacts/le-choix-de-clara/public/data/articles";

/// The file the sitemap is written to.
pub const OUTPUT_PATH: &str = "sitemap.xml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub base_url: Url,
}

impl SiteConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url).map_err(|source| ConfigError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;

        Ok(Self { base_url })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(BASE_URL).expect("BASE_URL is not a valid URL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirestoreConfig {
    pub api_base: String,
    pub project_id: String,
    pub collection_path: String,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            api_base: FIRESTORE_API_BASE.to_string(),
            project_id: PROJECT_ID.to_string(),
            collection_path: COLLECTION_PATH.to_string(),
        }
    }
}

impl FirestoreConfig {
    /// Returns the REST endpoint listing the documents of the configured collection.
    pub fn documents_url(&self) -> Result<Url, ConfigError> {
        let api_base = self.api_base.trim_end_matches('/');
        let project_id = &self.project_id;
        let collection_path = self.collection_path.trim_matches('/');

        let url = format!(
            "{api_base}/v1/projects/{project_id}/databases/(default)/documents/{collection_path}"
        );

        Url::parse(&url).map_err(|source| ConfigError::InvalidUrl { url, source })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub site: SiteConfig,
    pub firestore: FirestoreConfig,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            firestore: FirestoreConfig::default(),
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}
