//! CLI argument parsing for `newsctl`.
//!
//! CLI flags override every other configuration source.

use clap::{Parser, Subcommand};

/// News topic explorer
///
/// Crawls news categories into per-category corpora and fits topic models
/// over them.
#[derive(Parser, Debug)]
#[command(name = "newsctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides the default config location)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Override the data directory
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the known sections
    Sections,

    /// Crawl sections and replace their stored corpora
    Crawl {
        /// Section name or id; repeat for several (default: all)
        #[arg(short, long)]
        section: Vec<String>,

        /// Maximum listing pages per section
        #[arg(long)]
        max_pages: Option<u32>,

        /// First listing page
        #[arg(long)]
        start_page: Option<u32>,

        /// Keep repeated links instead of skipping them
        #[arg(long)]
        keep_duplicates: bool,
    },

    /// Fit a topic model over one section and print its labels
    Topics {
        /// Section name or id
        section: String,

        #[command(flatten)]
        model: ModelArgs,

        /// Keywords per label
        #[arg(long)]
        topn: Option<usize>,

        /// Enrich label keywords with their morpheme split
        #[arg(long)]
        contextual: bool,
    },

    /// Build report files for the rendering side
    Report {
        /// Section name or id; repeat for several (default: all)
        #[arg(short, long)]
        section: Vec<String>,

        #[command(flatten)]
        model: ModelArgs,
    },
}

/// Model overrides shared by modeling commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Number of topics
    #[arg(short = 'k', long)]
    pub num_topics: Option<usize>,

    /// Sampling sweeps over the corpus
    #[arg(long)]
    pub passes: Option<usize>,

    /// RNG seed for a reproducible fit
    #[arg(long)]
    pub seed: Option<u64>,
}
