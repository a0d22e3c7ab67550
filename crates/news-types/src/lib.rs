//! # news-types
//!
//! Shared records for the news topic pipeline.
//!
//! This crate defines the data that flows between the crawler, the text
//! normalizer and the topic model:
//! - Sections: the static category table of the news site
//! - Listing items: `(title, link)` pairs read from a listing page
//! - Articles: fetched and normalized detail pages, as persisted per category
//! - Fetch outcomes: explicit found / not found / transport error results
//!
//! ## Usage
//!
//! ```rust
//! use news_types::Section;
//!
//! let economy = Section::from_name("경제").unwrap();
//! assert_eq!(economy.id, 101);
//! ```

pub mod article;
pub mod outcome;
pub mod section;

pub use article::{Article, ArticleContent, ListingItem, NO_LINK, NO_TITLE};
pub use outcome::FetchOutcome;
pub use section::{Section, SECTIONS};
