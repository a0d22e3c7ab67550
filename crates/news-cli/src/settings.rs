//! Layered configuration for `newsctl`.
//!
//! Sources in order, later overriding earlier:
//! 1. Built-in defaults
//! 2. Default config file (`<config dir>/news-lda/config.{toml,json,yaml}`)
//! 3. `--config` file
//! 4. Environment variables (`NEWS_DATA_DIR`, `NEWS_CRAWLER__MAX_PAGES`, ...)
//!
//! CLI flags are applied by the caller after loading.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use news_crawler::CrawlerConfig;
use news_topics::TopicsConfig;

const APP_NAME: &str = "news-lda";

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding category corpora and reports
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub crawler: CrawlerConfig,

    #[serde(default)]
    pub topics: TopicsConfig,
}

fn default_data_dir() -> String {
    ProjectDirs::from("", "", APP_NAME)
        .map(|p| p.data_local_dir().join("data"))
        .unwrap_or_else(|| PathBuf::from("./data"))
        .to_string_lossy()
        .to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            crawler: CrawlerConfig::default(),
            topics: TopicsConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from defaults, config files and environment.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from("", "", APP_NAME)
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("data_dir", default_data_dir())?
            .set_default("log_level", default_log_level())?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Nested keys use a double underscore: NEWS_TOPICS__MODEL__NUM_TOPICS
        builder = builder.add_source(
            Environment::with_prefix("NEWS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), String> {
        if self.data_dir.trim().is_empty() {
            return Err("data_dir must not be empty".to_string());
        }
        self.crawler.validate()?;
        self.topics.validate()
    }

    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    /// Directory for rendered category reports.
    pub fn reports_path(&self) -> PathBuf {
        self.data_path().join("reports")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.crawler.max_pages, 5);
        assert_eq!(settings.topics.model.num_topics, 5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_reports_under_data_dir() {
        let settings = Settings {
            data_dir: "/srv/news".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.reports_path(), PathBuf::from("/srv/news/reports"));
    }

    #[test]
    fn test_load_from_cli_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("newsctl.toml");
        fs::write(
            &path,
            r#"
data_dir = "/tmp/news-data"
log_level = "debug"

[crawler]
max_pages = 2
dedupe_links = false

[topics.model]
num_topics = 3
seed = 11
"#,
        )
        .unwrap();

        let settings = Settings::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(settings.data_dir, "/tmp/news-data");
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.crawler.max_pages, 2);
        assert!(!settings.crawler.dedupe_links);
        assert_eq!(settings.crawler.delay_max_ms, 1500);
        assert_eq!(settings.topics.model.num_topics, 3);
        assert_eq!(settings.topics.model.seed, Some(11));
        assert_eq!(settings.topics.related.limit, 10);
    }

    #[test]
    fn test_missing_cli_file_is_error() {
        assert!(Settings::load(Some("/nonexistent/newsctl.toml")).is_err());
    }

    #[test]
    fn test_validate_reports_nested_errors() {
        let mut settings = Settings::default();
        settings.topics.model.num_topics = 1;
        assert!(settings.validate().unwrap_err().contains("num_topics"));
    }
}
