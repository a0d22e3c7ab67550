//! Token vocabulary and bag-of-words conversion.

use std::collections::{BTreeMap, HashMap};

/// Sparse `(token id, count)` representation of one document, sorted by id.
pub type BagOfWords = Vec<(usize, u32)>;

/// Bidirectional token/id mapping, frozen once built.
///
/// Ids are dense and assigned in first-seen order across the corpus.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    ids: HashMap<String, usize>,
    tokens: Vec<String>,
}

impl Vocabulary {
    /// Build from the union of tokens across all documents.
    pub fn build(documents: &[Vec<String>]) -> Self {
        let mut vocab = Self::default();
        for token in documents.iter().flatten() {
            if !vocab.ids.contains_key(token) {
                vocab.ids.insert(token.clone(), vocab.tokens.len());
                vocab.tokens.push(token.clone());
            }
        }
        vocab
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn id(&self, token: &str) -> Option<usize> {
        self.ids.get(token).copied()
    }

    pub fn token(&self, id: usize) -> Option<&str> {
        self.tokens.get(id).map(String::as_str)
    }

    /// Count known tokens of a document. Unknown tokens are ignored.
    pub fn doc2bow(&self, document: &[String]) -> BagOfWords {
        let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
        for id in document.iter().filter_map(|t| self.id(t)) {
            *counts.entry(id).or_insert(0) += 1;
        }
        counts.into_iter().collect()
    }
}
