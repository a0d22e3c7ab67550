//! Article body normalization.

use tracing::trace;

use crate::segmenter::{ParticleSegmenter, Segmenter};
use crate::stopwords::is_stop_word;

/// Remove every character that is not a Hangul syllable or whitespace.
pub fn clean(text: &str) -> String {
    text.chars()
        .filter(|c| matches!(c, '가'..='힣') || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalizes raw article text into space-joined morphemes.
///
/// Construct one per pipeline run and pass it by reference to every stage.
pub struct TextNormalizer {
    segmenter: Box<dyn Segmenter>,
}

impl TextNormalizer {
    /// Create a normalizer backed by the given segmenter.
    pub fn new(segmenter: Box<dyn Segmenter>) -> Self {
        Self { segmenter }
    }

    /// Clean, segment and filter text into tokens.
    ///
    /// Drops tokens of one character and stopwords.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned = clean(text);
        let tokens: Vec<String> = self
            .segmenter
            .morphs(&cleaned)
            .into_iter()
            .filter(|t| t.chars().count() > 1)
            .filter(|t| !is_stop_word(t))
            .collect();
        trace!(input_chars = text.chars().count(), tokens = tokens.len(), "Tokenized text");
        tokens
    }

    /// Normalize text: tokens joined by single spaces.
    pub fn process(&self, text: &str) -> String {
        self.tokenize(text).join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(Box::new(ParticleSegmenter::new()))
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::WhitespaceSegmenter;

    #[test]
    fn test_clean_keeps_hangul_and_whitespace() {
        assert_eq!(clean("삼성전자(005930) 주가가 3% 올랐다!"), "삼성전자 주가가  올랐다");
    }

    #[test]
    fn test_clean_drops_latin_and_digits() {
        assert_eq!(clean("AI 반도체 2024"), "반도체");
        assert_eq!(clean("Hello 123"), "");
    }

    #[test]
    fn test_process_removes_particles_and_stopwords() {
        let normalizer = TextNormalizer::default();
        let out = normalizer.process("정부는 그리고 예산을 국회에서 심의했다.");
        assert_eq!(out, "정부 예산 국회 심의했다");
    }

    #[test]
    fn test_tokenize_drops_single_chars() {
        let normalizer = TextNormalizer::new(Box::new(WhitespaceSegmenter));
        assert_eq!(normalizer.tokenize("물 가격 상승"), vec!["가격", "상승"]);
    }

    #[test]
    fn test_process_empty_input() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.process(""), "");
        assert_eq!(normalizer.process("2024 OECD"), "");
    }

    #[test]
    fn test_process_is_idempotent() {
        let normalizer = TextNormalizer::default();
        let inputs = [
            "서울에서도 부동산 가격이 오르고 있다.",
            "한국은행은 기준금리를 3.5%로 동결했다고 밝혔다.",
            "IT/과학: 인공지능(AI) 반도체의 수출이 증가했다",
        ];
        for input in inputs {
            let once = normalizer.process(input);
            assert_eq!(normalizer.process(&once), once, "input: {input}");
        }
    }
}
