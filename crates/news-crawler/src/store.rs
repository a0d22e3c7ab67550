//! Per-category corpus persistence.
//!
//! One JSON file per category, `<data_dir>/<file stem>.json`, holding an
//! array of `{title, link, body, processed_body}` records. Each save replaces
//! the whole file.

use std::fs;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use news_types::{Article, Section};

use crate::error::CrawlerError;

/// Storage for category corpora.
pub trait CorpusStore {
    /// Replace the stored corpus for a section. Returns the written location.
    fn save(&self, section: &Section, articles: &[Article]) -> Result<PathBuf, CrawlerError>;

    /// Load the stored corpus for a section. `Ok(None)` when none exists.
    fn load(&self, section: &Section) -> Result<Option<Vec<Article>>, CrawlerError>;
}

/// JSON file store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct JsonCorpusStore {
    data_dir: PathBuf,
}

impl JsonCorpusStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Location of a section's corpus file.
    pub fn path_for(&self, section: &Section) -> PathBuf {
        self.data_dir.join(format!("{}.json", section.file_stem()))
    }
}

impl CorpusStore for JsonCorpusStore {
    fn save(&self, section: &Section, articles: &[Article]) -> Result<PathBuf, CrawlerError> {
        fs::create_dir_all(&self.data_dir)?;
        let path = self.path_for(section);

        // Write beside the target so the rename stays on one filesystem.
        let tmp = NamedTempFile::new_in(&self.data_dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, articles)?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| CrawlerError::Storage(e.error))?;

        info!(
            section = section.display_name,
            articles = articles.len(),
            path = %path.display(),
            "Saved corpus"
        );
        Ok(path)
    }

    fn load(&self, section: &Section) -> Result<Option<Vec<Article>>, CrawlerError> {
        let path = self.path_for(section);
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No stored corpus");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let articles: Vec<Article> = serde_json::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), articles = articles.len(), "Loaded corpus");
        Ok(Some(articles))
    }
}
