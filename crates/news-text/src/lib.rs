//! # news-text
//!
//! Text normalization for scraped Korean news articles.
//!
//! Normalization runs in two steps:
//! - `clean`: keep Hangul syllables and whitespace only. This is lossy on
//!   purpose: embedded Latin text, digits and punctuation are discarded.
//! - `segment + filter`: split into morphemes through a pluggable
//!   [`Segmenter`], then drop one-character tokens and stopwords.
//!
//! Output is deterministic for a given segmenter. A different segmenter (or a
//! new version of an external analyser) may segment differently.

pub mod normalizer;
pub mod segmenter;
pub mod stopwords;

pub use normalizer::{clean, TextNormalizer};
pub use segmenter::{ParticleSegmenter, Segmenter, WhitespaceSegmenter};
pub use stopwords::{is_stop_word, STOP_WORDS};
