//! HTML helpers built on `scraper`.

use scraper::{ElementRef, Selector};

use crate::error::CrawlerError;

/// Parse a CSS selector, reporting the offending source on failure.
pub(crate) fn selector(source: &str) -> Result<Selector, CrawlerError> {
    Selector::parse(source).map_err(|e| CrawlerError::Selector(format!("{source}: {e}")))
}

/// Visible text of an element: trimmed text fragments joined by one space.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
