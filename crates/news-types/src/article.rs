//! Listing items and articles.

use serde::{Deserialize, Serialize};
use url::Url;

/// Display fallback for a listing item without a title.
pub const NO_TITLE: &str = "No title";

/// Display fallback for a listing item without a link.
pub const NO_LINK: &str = "No link";

/// One entry of a listing page.
///
/// Either field may be missing when the item markup lacks the expected
/// element; the listing page itself is still usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingItem {
    /// Anchor text of the item
    pub title: Option<String>,
    /// Absolute detail page URL
    pub link: Option<Url>,
}

impl ListingItem {
    /// Create a complete listing item.
    pub fn new(title: impl Into<String>, link: Url) -> Self {
        Self {
            title: Some(title.into()),
            link: Some(link),
        }
    }

    /// Title, or the `"No title"` sentinel.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(NO_TITLE)
    }

    /// Link, or the `"No link"` sentinel.
    pub fn display_link(&self) -> String {
        self.link
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_else(|| NO_LINK.to_string())
    }
}

/// Headline and body text extracted from a detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent {
    pub title: String,
    pub body: String,
}

/// A fetched and normalized article.
///
/// Serialized as `{title, link, body, processed_body}`, the per-category
/// corpus file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline from the detail page
    pub title: String,
    /// Detail page URL; identity of the article
    pub link: String,
    /// Body text as extracted from the page
    #[serde(rename = "body", default)]
    pub raw_body: String,
    /// Body after normalization (space-joined morphemes)
    #[serde(rename = "processed_body", default)]
    pub normalized_body: String,
}

impl Article {
    /// Build an article from fetched content and its normalized body.
    pub fn new(link: &Url, content: ArticleContent, normalized_body: String) -> Self {
        Self {
            title: content.title,
            link: link.to_string(),
            raw_body: content.body,
            normalized_body,
        }
    }
}
