//! Crawler configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::corpus::DedupePolicy;
use crate::pacing::Pacing;

/// Crawler settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// AJAX listing endpoint
    #[serde(default = "default_listing_url")]
    pub listing_url: String,

    /// Origin that relative article links are joined against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Accept-Language header sent with every request
    #[serde(default = "default_accept_language")]
    pub accept_language: String,

    /// First listing page number
    #[serde(default = "default_start_page")]
    pub start_page: u32,

    /// Maximum listing pages per section
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Lower bound of the delay between requests (ms)
    #[serde(default = "default_delay_min_ms")]
    pub delay_min_ms: u64,

    /// Upper bound of the delay between requests (ms)
    #[serde(default = "default_delay_max_ms")]
    pub delay_max_ms: u64,

    /// Per-request timeout. None keeps the transport default (no timeout),
    /// so a hung request blocks the crawl.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Skip articles whose link was already collected in this run
    #[serde(default = "default_true")]
    pub dedupe_links: bool,
}

fn default_listing_url() -> String {
    "https://news.naver.com/section/template/SECTION_ARTICLE_LIST".to_string()
}

fn default_base_url() -> String {
    "https://news.naver.com".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/109.0.0.0 Safari/537.36".to_string()
}

fn default_accept_language() -> String {
    "ko-KR,ko;q=0.9".to_string()
}

fn default_start_page() -> u32 {
    1
}

fn default_max_pages() -> u32 {
    5
}

fn default_delay_min_ms() -> u64 {
    300
}

fn default_delay_max_ms() -> u64 {
    1500
}

fn default_true() -> bool {
    true
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            listing_url: default_listing_url(),
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
            start_page: default_start_page(),
            max_pages: default_max_pages(),
            delay_min_ms: default_delay_min_ms(),
            delay_max_ms: default_delay_max_ms(),
            request_timeout_secs: None,
            dedupe_links: default_true(),
        }
    }
}

impl CrawlerConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        url::Url::parse(&self.listing_url)
            .map_err(|e| format!("listing_url is not a valid URL: {e}"))?;
        url::Url::parse(&self.base_url).map_err(|e| format!("base_url is not a valid URL: {e}"))?;
        if self.start_page == 0 {
            return Err("start_page must be >= 1".to_string());
        }
        if self.delay_min_ms > self.delay_max_ms {
            return Err(format!(
                "delay_min_ms ({}) must not exceed delay_max_ms ({})",
                self.delay_min_ms, self.delay_max_ms
            ));
        }
        if self.request_timeout_secs == Some(0) {
            return Err("request_timeout_secs must be > 0 when set".to_string());
        }
        Ok(())
    }

    /// Delay policy between successive requests.
    pub fn pacing(&self) -> Pacing {
        Pacing::new(
            Duration::from_millis(self.delay_min_ms),
            Duration::from_millis(self.delay_max_ms),
        )
    }

    pub fn dedupe_policy(&self) -> DedupePolicy {
        if self.dedupe_links {
            DedupePolicy::ByLink
        } else {
            DedupePolicy::KeepAll
        }
    }
}
