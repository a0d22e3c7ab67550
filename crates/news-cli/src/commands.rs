//! Command implementations.

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use news_crawler::{
    build_client, ArticleFetcher, CorpusBuilder, CorpusStore, JsonCorpusStore, ListingFetcher,
};
use news_text::{ParticleSegmenter, TextNormalizer};
use news_topics::{MorphemeLookup, TopicLabeler, TopicModel, TopicsConfig};
use news_types::{Section, SECTIONS};

use crate::cli::ModelArgs;
use crate::report::{build_category_report, write_report};
use crate::settings::Settings;

/// Load settings, apply global CLI overrides and initialize logging.
pub fn init(
    config_path: Option<&str>,
    log_level_override: Option<&str>,
    data_dir_override: Option<&str>,
) -> Result<Settings> {
    let mut settings = Settings::load(config_path).context("Failed to load configuration")?;

    if let Some(log_level) = log_level_override {
        settings.log_level = log_level.to_string();
    }
    if let Some(data_dir) = data_dir_override {
        settings.data_dir = data_dir.to_string();
    }

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.log_level)),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    Ok(settings)
}

/// Resolve section keys; no keys selects every section.
pub fn resolve_sections(keys: &[String]) -> Result<Vec<Section>> {
    if keys.is_empty() {
        return Ok(SECTIONS.to_vec());
    }
    keys.iter()
        .map(|key| {
            Section::resolve(key).with_context(|| {
                format!(
                    "Unknown section '{key}'. Known sections: {}",
                    SECTIONS
                        .iter()
                        .map(|s| s.display_name)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
        })
        .collect()
}

/// Apply model overrides to a topics configuration.
pub fn apply_model_args(topics: &mut TopicsConfig, args: &ModelArgs) {
    if let Some(k) = args.num_topics {
        topics.model.num_topics = k;
    }
    if let Some(passes) = args.passes {
        topics.model.passes = passes;
    }
    if let Some(seed) = args.seed {
        topics.model.seed = Some(seed);
    }
}

fn labeler(topics: &TopicsConfig) -> TopicLabeler {
    TopicLabeler::with_lookup(
        topics.labeling.clone(),
        Box::new(MorphemeLookup::new(ParticleSegmenter::new())),
    )
}

pub fn list_sections() {
    println!("ID     SECTION");
    for section in SECTIONS {
        println!("{:<6} {}", section.id, section.display_name);
    }
}

/// Crawl the selected sections, one after another.
pub async fn run_crawl(
    mut settings: Settings,
    sections: &[String],
    max_pages: Option<u32>,
    start_page: Option<u32>,
    keep_duplicates: bool,
) -> Result<()> {
    if let Some(max_pages) = max_pages {
        settings.crawler.max_pages = max_pages;
    }
    if let Some(start_page) = start_page {
        settings.crawler.start_page = start_page;
    }
    if keep_duplicates {
        settings.crawler.dedupe_links = false;
    }
    settings
        .validate()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Invalid configuration")?;

    let sections = resolve_sections(sections)?;
    let config = &settings.crawler;

    let client = build_client(config).context("Failed to build HTTP client")?;
    let listing = ListingFetcher::new(client.clone(), config)?;
    let fetcher = ArticleFetcher::new(client)?;
    let normalizer = TextNormalizer::default();
    let store = JsonCorpusStore::new(settings.data_path());

    let builder = CorpusBuilder::new(&listing, &fetcher, &normalizer, &store)
        .with_pacing(config.pacing())
        .with_dedupe(config.dedupe_policy())
        .with_start_page(config.start_page);

    info!(
        sections = sections.len(),
        max_pages = config.max_pages,
        dedupe = ?config.dedupe_policy(),
        data_dir = %store.data_dir().display(),
        "Starting crawl"
    );

    let mut failed = 0;
    for (section, result) in builder.build_all(&sections, config.max_pages).await {
        match result {
            Ok(corpus) => println!("{}", corpus.summary),
            Err(e) => {
                failed += 1;
                println!("{section}: failed: {e}");
            }
        }
    }

    if failed == sections.len() && !sections.is_empty() {
        bail!("Every category failed to persist");
    }
    Ok(())
}

/// Fit a model over one stored corpus and print its labels.
pub fn run_topics(
    mut settings: Settings,
    section: &str,
    model_args: &ModelArgs,
    topn: Option<usize>,
    contextual: bool,
) -> Result<()> {
    apply_model_args(&mut settings.topics, model_args);
    if let Some(topn) = topn {
        settings.topics.labeling.topn = topn;
    }
    if contextual {
        settings.topics.labeling.contextual = true;
    }
    settings
        .validate()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Invalid configuration")?;

    let section = resolve_sections(&[section.to_string()])?
        .into_iter()
        .next()
        .context("No section selected")?;

    let store = JsonCorpusStore::new(settings.data_path());
    let Some(articles) = store
        .load(&section)
        .with_context(|| format!("Failed to read corpus for {section}"))?
    else {
        warn!("{} data not found", section.display_name);
        println!("{section}: no stored corpus, run `newsctl crawl -s {}` first", section.id);
        return Ok(());
    };

    let documents: Vec<Vec<String>> = articles
        .iter()
        .map(|a| a.normalized_body.split_whitespace().map(String::from).collect())
        .collect();

    let model = TopicModel::fit(&documents, &settings.topics.model)
        .with_context(|| format!("Topic modeling failed for {section}"))?;
    let labels = labeler(&settings.topics)
        .label_model(&model)
        .context("Failed to label topics")?;

    println!("{section}: {} documents", model.num_documents());
    for label in labels {
        println!("  {}", label.rendered_text);
    }
    Ok(())
}

/// Build and write reports for the selected sections.
///
/// A category whose corpus cannot be read, or whose report cannot be written,
/// is reported and skipped. Fails only when every category failed.
pub fn run_report(mut settings: Settings, sections: &[String], model_args: &ModelArgs) -> Result<()> {
    apply_model_args(&mut settings.topics, model_args);
    settings
        .validate()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Invalid configuration")?;

    let sections = resolve_sections(sections)?;
    let store = JsonCorpusStore::new(settings.data_path());
    let topic_labeler = labeler(&settings.topics);
    let reports_dir = settings.reports_path();

    let mut failed = 0;
    for section in &sections {
        let report = match build_category_report(&store, section, &settings.topics, &topic_labeler) {
            Ok(report) => report,
            Err(e) => {
                failed += 1;
                warn!(section = section.display_name, error = %e, "Failed to read corpus");
                println!("{section}: failed: {e}");
                continue;
            }
        };

        match write_report(&reports_dir, section, &report) {
            Ok(path) => println!(
                "{section}: {:?}, {} topics -> {}",
                report.status,
                report.topics.len(),
                path.display()
            ),
            Err(e) => {
                failed += 1;
                warn!(section = section.display_name, error = %e, "Failed to write report");
                println!("{section}: failed to write report: {e}");
            }
        }
    }

    if failed == sections.len() && !sections.is_empty() {
        bail!("Every category report failed");
    }
    Ok(())
}
