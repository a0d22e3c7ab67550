//! # news-topics
//!
//! Topic modeling over tokenized news articles.
//!
//! ## Pipeline
//! 1. [`Vocabulary`] maps every corpus token to a dense id
//! 2. [`TopicModel::fit`] runs collapsed Gibbs LDA for a fixed number of sweeps
//! 3. [`TopicLabeler`] renders per-topic labels from top keywords
//! 4. [`combine`] and [`single_topic`] build word-cloud frequency maps
//! 5. [`related_documents`] maps a topic back to its member documents
//!
//! Fitting is CPU-bound and synchronous with no cancellation.

pub mod config;
pub mod error;
pub mod frequency;
pub mod labeling;
pub mod model;
pub mod related;
pub mod vocabulary;

pub use config::{FrequencyConfig, LabelingConfig, LdaConfig, RelatedConfig, TopicsConfig};
pub use error::TopicsError;
pub use frequency::{combine, single_topic, FrequencyMap};
pub use labeling::{MorphemeLookup, NoOpSenseLookup, SenseLookup, TopicLabel, TopicLabeler};
pub use model::{KeywordSource, TopicModel};
pub use related::related_documents;
pub use vocabulary::{BagOfWords, Vocabulary};
