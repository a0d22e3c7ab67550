//! Topic labels from top keywords.
//!
//! A label reads `Topic <n>: kw1, kw2, ...` with `n` counted from one. In
//! contextual mode each keyword may carry an enrichment from a
//! [`SenseLookup`], rendered as `kw(enrichment)`.

use serde::Serialize;
use tracing::warn;

use news_text::Segmenter;

use crate::config::LabelingConfig;
use crate::error::TopicsError;
use crate::model::KeywordSource;

/// Rendered label of one topic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicLabel {
    pub topic_id: usize,
    /// Top keywords, weight descending
    pub keywords: Vec<String>,
    pub rendered_text: String,
}

/// Lexical lookup keyed by a single keyword.
///
/// Returns at most one short sense or relation for display.
pub trait SenseLookup: Send + Sync {
    fn lookup(&self, keyword: &str) -> Result<Option<String>, TopicsError>;
}

/// Lookup that never enriches.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSenseLookup;

impl SenseLookup for NoOpSenseLookup {
    fn lookup(&self, _keyword: &str) -> Result<Option<String>, TopicsError> {
        Ok(None)
    }
}

/// Re-segments a keyword and reports its parts joined by `+`.
///
/// Keywords that do not split yield no enrichment.
pub struct MorphemeLookup<S: Segmenter> {
    segmenter: S,
}

impl<S: Segmenter> MorphemeLookup<S> {
    pub fn new(segmenter: S) -> Self {
        Self { segmenter }
    }
}

impl<S: Segmenter> SenseLookup for MorphemeLookup<S> {
    fn lookup(&self, keyword: &str) -> Result<Option<String>, TopicsError> {
        let parts = self.segmenter.morphs(keyword);
        Ok((parts.len() > 1).then(|| parts.join("+")))
    }
}

/// Builds labels for every topic of a model.
pub struct TopicLabeler {
    config: LabelingConfig,
    lookup: Box<dyn SenseLookup>,
}

impl TopicLabeler {
    /// Create a labeler with no enrichment source.
    pub fn new(config: LabelingConfig) -> Self {
        Self::with_lookup(config, Box::new(NoOpSenseLookup))
    }

    /// Create a labeler with a sense lookup for contextual mode.
    pub fn with_lookup(config: LabelingConfig, lookup: Box<dyn SenseLookup>) -> Self {
        Self { config, lookup }
    }

    /// One label per topic id `0..num_topics`, in id order.
    pub fn label_all<M: KeywordSource + ?Sized>(
        &self,
        model: &M,
        num_topics: usize,
        topn: usize,
    ) -> Result<Vec<TopicLabel>, TopicsError> {
        (0..num_topics)
            .map(|topic_id| {
                let keywords: Vec<String> = model
                    .top_keywords(topic_id, topn)?
                    .into_iter()
                    .map(|(token, _)| token)
                    .collect();
                let rendered_text = self.render(topic_id, &keywords);
                Ok(TopicLabel {
                    topic_id,
                    keywords,
                    rendered_text,
                })
            })
            .collect()
    }

    /// Label every topic with the configured keyword count.
    pub fn label_model<M: KeywordSource + ?Sized>(
        &self,
        model: &M,
    ) -> Result<Vec<TopicLabel>, TopicsError> {
        self.label_all(model, model.num_topics(), self.config.topn)
    }

    fn render(&self, topic_id: usize, keywords: &[String]) -> String {
        let mut text = format!("Topic {}: ", topic_id + 1);
        let mut len = text.chars().count();

        for (i, keyword) in keywords.iter().enumerate() {
            let part = self.decorate(keyword);
            let sep = if i == 0 { "" } else { ", " };
            let added = sep.chars().count() + part.chars().count();
            // The first keyword is always kept.
            if i > 0 && len + added > self.config.max_label_length {
                break;
            }
            text.push_str(sep);
            text.push_str(&part);
            len += added;
        }

        text
    }

    fn decorate(&self, keyword: &str) -> String {
        if !self.config.contextual {
            return keyword.to_string();
        }
        match self.lookup.lookup(keyword) {
            Ok(Some(sense)) if !sense.is_empty() => format!("{keyword}({sense})"),
            Ok(_) => keyword.to_string(),
            Err(e) => {
                warn!(keyword, error = %e, "Sense lookup failed, omitting enrichment");
                keyword.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use news_text::{ParticleSegmenter, WhitespaceSegmenter};
    use pretty_assertions::assert_eq;

    /// Fixed keyword rankings per topic.
    struct StubModel(Vec<Vec<(&'static str, f64)>>);

    impl KeywordSource for StubModel {
        fn num_topics(&self) -> usize {
            self.0.len()
        }

        fn top_keywords(&self, topic: usize, n: usize) -> Result<Vec<(String, f64)>, TopicsError> {
            let row = self.0.get(topic).ok_or(TopicsError::TopicOutOfRange {
                topic,
                num_topics: self.0.len(),
            })?;
            Ok(row.iter().take(n).map(|(t, w)| (t.to_string(), *w)).collect())
        }
    }

    struct FailingLookup;

    impl SenseLookup for FailingLookup {
        fn lookup(&self, keyword: &str) -> Result<Option<String>, TopicsError> {
            if keyword == "금리" {
                Err(TopicsError::Lookup("dictionary offline".to_string()))
            } else {
                Ok(Some("뜻".to_string()))
            }
        }
    }

    fn stub() -> StubModel {
        StubModel(vec![
            vec![("금리", 0.3), ("은행", 0.2), ("대출", 0.1)],
            vec![("축구", 0.4), ("선수", 0.3), ("경기", 0.05)],
        ])
    }

    #[test]
    fn test_label_all_in_topic_order() {
        let labeler = TopicLabeler::new(LabelingConfig::default());
        let labels = labeler.label_all(&stub(), 2, 2).unwrap();

        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].topic_id, 0);
        assert_eq!(labels[0].keywords, vec!["금리", "은행"]);
        assert_eq!(labels[0].rendered_text, "Topic 1: 금리, 은행");
        assert_eq!(labels[1].rendered_text, "Topic 2: 축구, 선수");
    }

    #[test]
    fn test_label_all_beyond_model_topics_is_error() {
        let labeler = TopicLabeler::new(LabelingConfig::default());
        assert!(matches!(
            labeler.label_all(&stub(), 3, 2),
            Err(TopicsError::TopicOutOfRange { topic: 2, .. })
        ));
    }

    #[test]
    fn test_truncates_at_keyword_boundary() {
        let config = LabelingConfig {
            max_label_length: "Topic 1: 금리, 은행".chars().count() + 1,
            ..Default::default()
        };
        let labels = TopicLabeler::new(config).label_model(&stub()).unwrap();
        assert_eq!(labels[0].rendered_text, "Topic 1: 금리, 은행");
        // keywords stay complete even when the text is shortened
        assert_eq!(labels[0].keywords.len(), 3);
    }

    #[test]
    fn test_first_keyword_always_rendered() {
        let config = LabelingConfig {
            max_label_length: 3,
            ..Default::default()
        };
        let labels = TopicLabeler::new(config).label_model(&stub()).unwrap();
        assert_eq!(labels[1].rendered_text, "Topic 2: 축구");
    }

    #[test]
    fn test_contextual_with_morpheme_lookup() {
        let config = LabelingConfig {
            contextual: true,
            ..Default::default()
        };
        let model = StubModel(vec![vec![("정부기관", 0.5), ("예산", 0.2)], vec![("선거", 0.5)]]);
        let labeler = TopicLabeler::with_lookup(
            config,
            Box::new(MorphemeLookup::new(SplitCompound)),
        );
        let labels = labeler.label_all(&model, 2, 2).unwrap();
        assert_eq!(labels[0].rendered_text, "Topic 1: 정부기관(정부+기관), 예산");
        assert_eq!(labels[1].rendered_text, "Topic 2: 선거");
    }

    #[test]
    fn test_lookup_failure_omits_enrichment_only() {
        let config = LabelingConfig {
            contextual: true,
            ..Default::default()
        };
        let labeler = TopicLabeler::with_lookup(config, Box::new(FailingLookup));
        let labels = labeler.label_all(&stub(), 1, 2).unwrap();
        assert_eq!(labels[0].rendered_text, "Topic 1: 금리, 은행(뜻)");
    }

    #[test]
    fn test_non_contextual_ignores_lookup() {
        let labeler =
            TopicLabeler::with_lookup(LabelingConfig::default(), Box::new(FailingLookup));
        let labels = labeler.label_all(&stub(), 1, 2).unwrap();
        assert_eq!(labels[0].rendered_text, "Topic 1: 금리, 은행");
    }

    #[test]
    fn test_morpheme_lookup_single_piece_is_none() {
        let lookup = MorphemeLookup::new(WhitespaceSegmenter);
        assert_eq!(lookup.lookup("경제").unwrap(), None);

        let lookup = MorphemeLookup::new(ParticleSegmenter::new());
        assert_eq!(lookup.lookup("정부는").unwrap(), Some("정부+는".to_string()));
    }

    /// Splits a four-syllable compound in half.
    struct SplitCompound;

    impl Segmenter for SplitCompound {
        fn morphs(&self, text: &str) -> Vec<String> {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() == 4 {
                vec![chars[..2].iter().collect(), chars[2..].iter().collect()]
            } else {
                vec![text.to_string()]
            }
        }
    }
}
