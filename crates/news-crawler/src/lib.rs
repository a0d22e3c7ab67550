//! # news-crawler
//!
//! Crawls a news site's cursor-paginated listing endpoint and its article
//! pages, and builds one normalized corpus per category.
//!
//! ## Features
//! - Listing walk that echoes the server cursor back until it runs out
//! - Fail-soft paging: a transport or parse fault truncates, never aborts
//! - Both-or-nothing headline/body extraction from detail pages
//! - Randomized pacing between requests
//! - Atomic whole-file replacement of each category's corpus
//!
//! Requests are awaited one at a time. Nothing here spawns or joins.

pub mod article;
pub mod client;
pub mod config;
pub mod corpus;
pub mod error;
mod html;
pub mod listing;
pub mod pacing;
pub mod store;

pub use article::{parse_article, ArticleFetcher, ArticleSelectors};
pub use client::build_client;
pub use config::CrawlerConfig;
pub use corpus::{CategoryCorpus, CorpusBuilder, CrawlSummary, DedupePolicy};
pub use error::CrawlerError;
pub use listing::{
    parse_listing_page, ListingFetcher, ListingPage, ListingRun, ListingSelectors, StopReason,
};
pub use pacing::Pacing;
pub use store::{CorpusStore, JsonCorpusStore};
