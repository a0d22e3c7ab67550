//! `newsctl` library exports.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations (sections, crawl, topics, report)
//! - `report`: Per-category report assembly for the rendering side
//! - `settings`: Layered configuration

pub mod cli;
pub mod commands;
pub mod report;
pub mod settings;

pub use cli::{Cli, Commands, ModelArgs};
pub use commands::{init, list_sections, run_crawl, run_report, run_topics};
pub use report::{build_category_report, write_report, CategoryReport, ReportStatus};
pub use settings::Settings;
