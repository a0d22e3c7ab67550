//! Topic error types.

use thiserror::Error;

/// Errors that can occur during topic operations.
#[derive(Debug, Error)]
pub enum TopicsError {
    /// No documents to fit
    #[error("Corpus contains no documents")]
    EmptyCorpus,

    /// Documents exist but none has a token
    #[error("Corpus vocabulary is empty")]
    EmptyVocabulary,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Topic {topic} out of range (model has {num_topics} topics)")]
    TopicOutOfRange { topic: usize, num_topics: usize },

    #[error("Document {doc} out of range (model has {num_documents} documents)")]
    DocumentOutOfRange { doc: usize, num_documents: usize },

    /// Topic sampling weights were degenerate
    #[error("Sampling error: {0}")]
    Sampling(String),

    /// Keyword enrichment lookup failed
    #[error("Lookup error: {0}")]
    Lookup(String),
}
