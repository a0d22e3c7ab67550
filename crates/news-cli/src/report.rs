//! Per-category topic reports.
//!
//! A report bundles everything the rendering side needs for one category:
//! topic labels, the combined and per-topic frequency maps, and the articles
//! related to each topic. Reports are written as JSON under
//! `<data_dir>/reports/<file stem>.report.json`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use news_crawler::{CorpusStore, CrawlerError};
use news_topics::{
    combine, related_documents, single_topic, FrequencyMap, KeywordSource, TopicLabeler,
    TopicModel, TopicsConfig, TopicsError,
};
use news_types::{Article, Section, NO_TITLE};

/// Link shown for a related article without one.
pub const MISSING_LINK: &str = "#";

/// Outcome of building a category report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Ready,
    /// No persisted corpus for the category
    NotFound,
    /// The corpus exists but modeling failed
    ModelFailed,
}

#[derive(Debug, Clone, Serialize)]
pub struct RelatedArticle {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicReport {
    pub topic_id: usize,
    pub label: String,
    pub keywords: Vec<String>,
    /// Word-cloud map of this topic alone
    pub frequencies: FrequencyMap,
    pub related: Vec<RelatedArticle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub section: String,
    pub section_id: u32,
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub documents: usize,
    pub topics: Vec<TopicReport>,
    /// Word-cloud map summed over all topics
    pub combined_frequencies: FrequencyMap,
    pub generated_at: DateTime<Utc>,
}

impl CategoryReport {
    fn empty(section: &Section, status: ReportStatus, documents: usize) -> Self {
        Self {
            section: section.display_name.to_string(),
            section_id: section.id,
            status,
            error: None,
            documents,
            topics: Vec::new(),
            combined_frequencies: FrequencyMap::new(),
            generated_at: Utc::now(),
        }
    }
}

/// Build the report for one category from its persisted corpus.
///
/// A missing corpus or a failed fit still yields a report, with zero topics.
/// Only an unreadable corpus is an error.
pub fn build_category_report<S: CorpusStore + ?Sized>(
    store: &S,
    section: &Section,
    config: &TopicsConfig,
    labeler: &TopicLabeler,
) -> Result<CategoryReport, CrawlerError> {
    let Some(articles) = store.load(section)? else {
        warn!("{} data not found", section.display_name);
        return Ok(CategoryReport::empty(section, ReportStatus::NotFound, 0));
    };

    match analyze(&articles, config, labeler) {
        Ok((topics, combined_frequencies)) => {
            info!(
                section = section.display_name,
                documents = articles.len(),
                topics = topics.len(),
                "Built category report"
            );
            Ok(CategoryReport {
                topics,
                combined_frequencies,
                ..CategoryReport::empty(section, ReportStatus::Ready, articles.len())
            })
        }
        Err(e) => {
            warn!(section = section.display_name, error = %e, "Topic modeling failed");
            Ok(CategoryReport {
                error: Some(e.to_string()),
                ..CategoryReport::empty(section, ReportStatus::ModelFailed, articles.len())
            })
        }
    }
}

fn analyze(
    articles: &[Article],
    config: &TopicsConfig,
    labeler: &TopicLabeler,
) -> Result<(Vec<TopicReport>, FrequencyMap), TopicsError> {
    let documents: Vec<Vec<String>> = articles
        .iter()
        .map(|a| a.normalized_body.split_whitespace().map(String::from).collect())
        .collect();

    let model = TopicModel::fit(&documents, &config.model)?;
    let num_topics = model.num_topics();

    let labels = labeler.label_all(&model, num_topics, config.labeling.topn)?;
    let combined = combine(
        &model,
        num_topics,
        config.frequency.top_per_topic,
        config.frequency.min_weight,
    )?;

    let mut topics = Vec::with_capacity(num_topics);
    for label in labels {
        let frequencies = single_topic(&model, label.topic_id, config.frequency.single_topic_topn)?;
        if frequencies.is_empty() {
            warn!(topic = label.topic_id, "No data for topic");
        }

        let related = related_documents(
            &model,
            label.topic_id,
            config.related.threshold,
            config.related.limit,
        )?
        .into_iter()
        .filter_map(|doc| articles.get(doc))
        .map(related_article)
        .collect();

        topics.push(TopicReport {
            topic_id: label.topic_id,
            label: label.rendered_text,
            keywords: label.keywords,
            frequencies,
            related,
        });
    }

    Ok((topics, combined))
}

fn related_article(article: &Article) -> RelatedArticle {
    let or_default = |value: &str, fallback: &str| {
        if value.trim().is_empty() {
            fallback.to_string()
        } else {
            value.to_string()
        }
    };
    RelatedArticle {
        title: or_default(&article.title, NO_TITLE),
        link: or_default(&article.link, MISSING_LINK),
    }
}

/// Write a report as pretty JSON. Returns the file path.
pub fn write_report(
    reports_dir: &Path,
    section: &Section,
    report: &CategoryReport,
) -> Result<PathBuf, CrawlerError> {
    fs::create_dir_all(reports_dir)?;
    let path = reports_dir.join(format!("{}.report.json", section.file_stem()));
    fs::write(&path, serde_json::to_string_pretty(report)?)?;
    Ok(path)
}
