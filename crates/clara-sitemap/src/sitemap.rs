use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDate;

use crate::config::SiteConfig;
use crate::date::format_lastmod;
use crate::firestore::ArticleDescriptor;
use crate::permalink::Permalink;

const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// The crawl priority hint of a URL, between `0.0` and `1.0`.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub struct Priority(f32);

impl Priority {
    pub const HOME: Priority = Priority(1.0);
    pub const ABOUT: Priority = Priority(0.8);
    pub const ARTICLE: Priority = Priority(0.6);

    /// Returns a new [`Priority`], clamped to the range allowed by the sitemap protocol.
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct SitemapEntry {
    pub permalink: Permalink,
    pub lastmod: NaiveDate,
    pub priority: Priority,
}

/// Returns the entries of the sitemap: the home page, the about page, then
/// one entry per article in the order they were listed.
///
/// Every entry is stamped with `today`, as the article documents' own
/// modification times are not tracked.
pub fn sitemap_entries(
    config: &SiteConfig,
    articles: &[ArticleDescriptor],
    today: NaiveDate,
) -> Vec<SitemapEntry> {
    let mut entries = Vec::with_capacity(articles.len() + 2);

    entries.push(SitemapEntry {
        permalink: Permalink::home(config),
        lastmod: today,
        priority: Priority::HOME,
    });

    entries.push(SitemapEntry {
        permalink: Permalink::with_query(config, "p", "about"),
        lastmod: today,
        priority: Priority::ABOUT,
    });

    entries.extend(articles.iter().map(|article| SitemapEntry {
        permalink: Permalink::with_query(config, "a", &article.id),
        lastmod: today,
        priority: Priority::ARTICLE,
    }));

    entries
}

/// Renders the entries to a complete sitemap document.
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    UrlSet(entries).to_string()
}

struct UrlSet<'a>(&'a [SitemapEntry]);

impl fmt::Display for UrlSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{XML_PROLOG}")?;
        writeln!(f, r#"<urlset xmlns="{SITEMAP_NS}">"#)?;

        for entry in self.0 {
            writeln!(f, "  <url>")?;
            writeln!(f, "    <loc>{}</loc>", escape_xml(entry.permalink.as_str()))?;
            writeln!(f, "    <lastmod>{}</lastmod>", format_lastmod(entry.lastmod))?;
            writeln!(f, "    <priority>{}</priority>", entry.priority)?;
            writeln!(f, "  </url>")?;
        }

        write!(f, "</urlset>")
    }
}

fn escape_xml(content: &str) -> Cow<'_, str> {
    if !content.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(content);
    }

    Cow::Owned(
        content
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
