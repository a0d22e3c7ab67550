//! Crawler error types.

use thiserror::Error;

/// Errors that can occur while crawling or persisting a corpus.
///
/// Transport failures and missing page structure are not errors here: they
/// are absorbed as truncation or [`news_types::FetchOutcome`] values.
#[derive(Debug, Error)]
pub enum CrawlerError {
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// CSS selector could not be parsed
    #[error("Invalid selector: {0}")]
    Selector(String),

    /// Corpus file I/O failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Corpus file (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
