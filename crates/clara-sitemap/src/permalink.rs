use url::Url;

use crate::config::SiteConfig;

/// An absolute URL on the site.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Permalink(Url);

impl Permalink {
    /// Returns the permalink of the site root.
    pub fn home(config: &SiteConfig) -> Self {
        let mut url = config.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Self(url)
    }

    /// Returns the permalink of the site root with a single query parameter,
    /// which is how the site addresses its pages (`?p=about`) and articles (`?a=<id>`).
    ///
    /// The value is percent-encoded, leaving unreserved characters (`A-Z a-z 0-9 - _ . ~`) as is.
    pub fn with_query(config: &SiteConfig, key: &str, value: &str) -> Self {
        let Self(mut url) = Self::home(config);
        let query = format!("{key}={}", urlencoding::encode(value));
        url.set_query(Some(&query));

        Self(url)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
