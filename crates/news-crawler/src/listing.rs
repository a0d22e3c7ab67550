//! Cursor-paginated listing walk.
//!
//! Each listing response is JSON with an HTML fragment embedded at
//! `renderedComponent.SECTION_ARTICLE_LIST`. The fragment holds the article
//! items and, on a `div[data-cursor]`, the token to echo back for the next
//! page. A missing or empty token ends the walk.

use chrono::Utc;
use reqwest::Client;
use scraper::{Html, Selector};
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use news_types::ListingItem;

use crate::client::send_for_text;
use crate::config::CrawlerConfig;
use crate::error::CrawlerError;
use crate::html::{element_text, selector};
use crate::pacing::Pacing;

const FRAGMENT_PATH: [&str; 2] = ["renderedComponent", "SECTION_ARTICLE_LIST"];

/// Selectors for the listing fragment.
#[derive(Debug, Clone)]
pub struct ListingSelectors {
    item: Selector,
    title: Selector,
    cursor: Selector,
}

impl ListingSelectors {
    pub fn new() -> Result<Self, CrawlerError> {
        Ok(Self {
            item: selector(".sa_list li.sa_item")?,
            title: selector(".sa_text a")?,
            cursor: selector("div[data-cursor]")?,
        })
    }
}

/// One parsed listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    /// Token for the next page; None ends pagination
    pub next_cursor: Option<String>,
    pub items: Vec<ListingItem>,
}

/// Why a listing walk stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The page carried no cursor token
    CursorExhausted { page: u32 },
    /// `max_pages` pages were fetched
    PageLimit,
    /// Non-success status or network failure
    Transport { page: u32, detail: String },
    /// The response could not be parsed
    Parse { page: u32, detail: String },
}

impl StopReason {
    /// True when the walk ended early because of a fault.
    pub fn is_truncated(&self) -> bool {
        matches!(self, StopReason::Transport { .. } | StopReason::Parse { .. })
    }
}

/// Result of walking one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRun {
    /// Items of every successfully parsed page, in page order
    pub items: Vec<ListingItem>,
    /// Requests issued
    pub requests: u32,
    pub stop: StopReason,
}

/// Parse a listing response body.
///
/// Items missing the title anchor keep `None` for title and link; a link that
/// cannot be joined against `base` is `None` as well.
pub fn parse_listing_page(
    body: &str,
    base: &Url,
    selectors: &ListingSelectors,
) -> Result<ListingPage, CrawlerError> {
    let json: Value = serde_json::from_str(body)?;
    let fragment = FRAGMENT_PATH
        .iter()
        .try_fold(&json, |value, key| value.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default();

    let html = Html::parse_fragment(fragment);

    let items = html
        .select(&selectors.item)
        .map(|item| {
            let anchor = item.select(&selectors.title).next();
            let title = anchor.map(element_text);
            let link = anchor
                .and_then(|a| a.value().attr("href"))
                .and_then(|href| base.join(href.trim()).ok());
            ListingItem { title, link }
        })
        .collect();

    let next_cursor = html
        .select(&selectors.cursor)
        .next()
        .and_then(|el| el.value().attr("data-cursor"))
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from);

    Ok(ListingPage { next_cursor, items })
}

/// Walks the listing endpoint for one section.
pub struct ListingFetcher {
    client: Client,
    listing_url: Url,
    base_url: Url,
    selectors: ListingSelectors,
    pacing: Pacing,
}

impl ListingFetcher {
    /// Create a fetcher using the configured endpoint, origin and pacing.
    pub fn new(client: Client, config: &CrawlerConfig) -> Result<Self, CrawlerError> {
        Ok(Self {
            client,
            listing_url: Url::parse(&config.listing_url)?,
            base_url: Url::parse(&config.base_url)?,
            selectors: ListingSelectors::new()?,
            pacing: config.pacing(),
        })
    }

    /// Replace the delay policy between pages.
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Collect `(title, link)` items for pages `start_page ..
    /// start_page + max_pages - 1`.
    ///
    /// Never fails: faults truncate the result. Duplicates across pages are
    /// kept.
    pub async fn fetch(&self, section_id: u32, start_page: u32, max_pages: u32) -> Vec<ListingItem> {
        self.fetch_run(section_id, start_page, max_pages).await.items
    }

    /// Like [`fetch`](Self::fetch), also reporting request count and stop reason.
    pub async fn fetch_run(&self, section_id: u32, start_page: u32, max_pages: u32) -> ListingRun {
        let mut items = Vec::new();
        let mut cursor = String::new();
        let mut requests = 0;
        let mut stop = StopReason::PageLimit;

        for page in start_page..start_page.saturating_add(max_pages) {
            if requests > 0 {
                self.pacing.pause().await;
            }

            requests += 1;
            let body = match self.request_page(section_id, page, &cursor).await {
                Ok(body) => body,
                Err(detail) => {
                    warn!(sid = section_id, page, error = %detail, "Listing page fetch failed, stopping");
                    stop = StopReason::Transport { page, detail };
                    break;
                }
            };

            match parse_listing_page(&body, &self.base_url, &self.selectors) {
                Ok(parsed) => {
                    debug!(
                        sid = section_id,
                        page,
                        items = parsed.items.len(),
                        has_cursor = parsed.next_cursor.is_some(),
                        "Parsed listing page"
                    );
                    items.extend(parsed.items);
                    match parsed.next_cursor {
                        Some(next) => cursor = next,
                        None => {
                            info!(sid = section_id, page, "No more pages to fetch");
                            stop = StopReason::CursorExhausted { page };
                            break;
                        }
                    }
                }
                Err(e) => {
                    warn!(sid = section_id, page, error = %e, "Error parsing listing page, stopping");
                    stop = StopReason::Parse {
                        page,
                        detail: e.to_string(),
                    };
                    break;
                }
            }
        }

        info!(
            sid = section_id,
            requests,
            items = items.len(),
            stop = ?stop,
            "Listing walk finished"
        );

        ListingRun {
            items,
            requests,
            stop,
        }
    }

    async fn request_page(&self, section_id: u32, page: u32, cursor: &str) -> Result<String, String> {
        let cache_buster = Utc::now().timestamp_millis().to_string();
        let params: [(&str, String); 7] = [
            ("sid", section_id.to_string()),
            ("sid2", String::new()),
            ("cluid", String::new()),
            ("pageNo", page.to_string()),
            ("date", String::new()),
            ("next", cursor.to_string()),
            ("_", cache_buster),
        ];

        send_for_text(self.client.get(self.listing_url.clone()).query(&params)).await
    }
}
