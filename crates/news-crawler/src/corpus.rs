//! Per-category corpus assembly.
//!
//! Walks a section's listing, fetches each linked detail page, normalizes the
//! body and persists the resulting articles in one replace-whole write.
//! Faults below the category level are counted and logged, never raised.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use news_text::TextNormalizer;
use news_types::{Article, FetchOutcome, Section};

use crate::article::ArticleFetcher;
use crate::error::CrawlerError;
use crate::listing::{ListingFetcher, StopReason};
use crate::pacing::Pacing;
use crate::store::CorpusStore;

/// How repeated links within one category run are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupePolicy {
    /// Fetch each link once; later repeats are counted and skipped
    #[default]
    ByLink,
    /// Fetch and keep every listed link, repeats included
    KeepAll,
}

/// Counters for one category run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    pub section: Section,
    /// Items returned by the listing walk
    pub listed: usize,
    /// Items without a usable link
    pub skipped_links: usize,
    /// Repeated links skipped under [`DedupePolicy::ByLink`]
    pub duplicates: usize,
    /// Detail pages that were absent or failed to fetch
    pub failed_fetches: usize,
    /// Articles persisted
    pub articles: usize,
    pub stop: StopReason,
    pub path: PathBuf,
}

impl fmt::Display for CrawlSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} articles saved to {} (listed {}, skipped {}, duplicates {}, failed {}, stop {:?})",
            self.section,
            self.articles,
            self.path.display(),
            self.listed,
            self.skipped_links,
            self.duplicates,
            self.failed_fetches,
            self.stop
        )
    }
}

/// Articles of one category and how they were collected.
#[derive(Debug, Clone)]
pub struct CategoryCorpus {
    pub articles: Vec<Article>,
    pub summary: CrawlSummary,
}

/// Builds category corpora from the listing and detail fetchers.
///
/// All collaborators are borrowed: one normalizer and one store serve every
/// category of a run.
pub struct CorpusBuilder<'a, S: CorpusStore + ?Sized> {
    listing: &'a ListingFetcher,
    fetcher: &'a ArticleFetcher,
    normalizer: &'a TextNormalizer,
    store: &'a S,
    pacing: Pacing,
    dedupe: DedupePolicy,
    start_page: u32,
}

impl<'a, S: CorpusStore + ?Sized> CorpusBuilder<'a, S> {
    pub fn new(
        listing: &'a ListingFetcher,
        fetcher: &'a ArticleFetcher,
        normalizer: &'a TextNormalizer,
        store: &'a S,
    ) -> Self {
        Self {
            listing,
            fetcher,
            normalizer,
            store,
            pacing: Pacing::default(),
            dedupe: DedupePolicy::default(),
            start_page: 1,
        }
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_dedupe(mut self, dedupe: DedupePolicy) -> Self {
        self.dedupe = dedupe;
        self
    }

    pub fn with_start_page(mut self, start_page: u32) -> Self {
        self.start_page = start_page;
        self
    }

    /// Crawl one section and replace its persisted corpus.
    ///
    /// Only a persistence failure is an error; the persisted set is always
    /// the complete result of this run.
    pub async fn build_category(
        &self,
        section: &Section,
        max_pages: u32,
    ) -> Result<CategoryCorpus, CrawlerError> {
        info!(section = section.display_name, sid = section.id, "Crawling category");

        let run = self
            .listing
            .fetch_run(section.id, self.start_page, max_pages)
            .await;
        if run.stop.is_truncated() {
            warn!(section = section.display_name, stop = ?run.stop, "Listing truncated");
        }

        let listed = run.items.len();
        let mut skipped_links = 0;
        let mut duplicates = 0;
        let mut failed_fetches = 0;
        let mut seen: HashSet<String> = HashSet::new();
        let mut articles = Vec::new();
        let mut fetched = 0usize;

        for item in &run.items {
            let Some(link) = &item.link else {
                warn!(title = item.display_title(), "Skipping listing item without link");
                skipped_links += 1;
                continue;
            };

            if self.dedupe == DedupePolicy::ByLink && !seen.insert(link.as_str().to_string()) {
                duplicates += 1;
                continue;
            }

            if fetched > 0 {
                self.pacing.pause().await;
            }
            fetched += 1;

            match self.fetcher.fetch_content(link).await {
                FetchOutcome::Found(content) => {
                    let normalized = self.normalizer.process(&content.body);
                    articles.push(Article::new(link, content, normalized));
                }
                FetchOutcome::NotFound => {
                    warn!(link = %link, "Article content not found, skipping");
                    failed_fetches += 1;
                }
                FetchOutcome::TransportError(detail) => {
                    warn!(link = %link, error = %detail, "Article fetch failed, skipping");
                    failed_fetches += 1;
                }
            }
        }

        let path = self.store.save(section, &articles)?;

        let summary = CrawlSummary {
            section: *section,
            listed,
            skipped_links,
            duplicates,
            failed_fetches,
            articles: articles.len(),
            stop: run.stop,
            path,
        };
        info!(%summary, "Category crawl finished");

        Ok(CategoryCorpus { articles, summary })
    }

    /// Crawl sections in order, pausing between categories.
    ///
    /// A failed category is logged and reported; the rest still run.
    pub async fn build_all(
        &self,
        sections: &[Section],
        max_pages: u32,
    ) -> Vec<(Section, Result<CategoryCorpus, CrawlerError>)> {
        let mut results = Vec::with_capacity(sections.len());
        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                self.pacing.pause().await;
            }
            let result = self.build_category(section, max_pages).await;
            if let Err(e) = &result {
                warn!(section = section.display_name, error = %e, "Category crawl failed");
            }
            results.push((*section, result));
        }
        results
    }
}
