//! newsctl
//!
//! Crawls news categories into per-category corpora and fits LDA topic
//! models over them.
//!
//! # Usage
//!
//! ```bash
//! newsctl sections
//! newsctl crawl [--section NAME|ID]... [--max-pages N] [--start-page N]
//! newsctl topics SECTION [-k TOPICS] [--passes N] [--seed N] [--contextual]
//! newsctl report [--section NAME|ID]... [-k TOPICS]
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/news-lda/config.toml)
//! 3. Environment variables (NEWS_*)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use news_cli::{init, list_sections, run_crawl, run_report, run_topics, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        config,
        log_level,
        data_dir,
        command,
    } = Cli::parse();

    // Listing sections needs neither settings nor logging.
    let load = || init(config.as_deref(), log_level.as_deref(), data_dir.as_deref());

    match command {
        Commands::Sections => list_sections(),
        Commands::Crawl {
            section,
            max_pages,
            start_page,
            keep_duplicates,
        } => {
            run_crawl(load()?, &section, max_pages, start_page, keep_duplicates).await?;
        }
        Commands::Topics {
            section,
            model,
            topn,
            contextual,
        } => {
            run_topics(load()?, &section, &model, topn, contextual)?;
        }
        Commands::Report { section, model } => {
            run_report(load()?, &section, &model)?;
        }
    }

    Ok(())
}
