//! Token frequency maps for word-cloud rendering.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::TopicsError;
use crate::model::KeywordSource;

/// Token to weight mapping consumed by the renderer.
pub type FrequencyMap = BTreeMap<String, f64>;

/// Sum top keyword weights across topics.
///
/// Each topic contributes its top `top_per_topic` keywords. Weights below
/// `min_weight` are dropped before summing; a token listed by several topics
/// gets the sum of its weights.
pub fn combine<M: KeywordSource + ?Sized>(
    model: &M,
    num_topics: usize,
    top_per_topic: usize,
    min_weight: f64,
) -> Result<FrequencyMap, TopicsError> {
    let mut combined = FrequencyMap::new();
    for topic in 0..num_topics {
        for (token, weight) in model.top_keywords(topic, top_per_topic)? {
            if weight < min_weight {
                continue;
            }
            *combined.entry(token).or_insert(0.0) += weight;
        }
    }
    debug!(topics = num_topics, tokens = combined.len(), "Combined frequency map");
    Ok(combined)
}

/// Frequency map of a single topic's top `topn` keywords.
///
/// An empty map means there is no data to render for the topic.
pub fn single_topic<M: KeywordSource + ?Sized>(
    model: &M,
    topic: usize,
    topn: usize,
) -> Result<FrequencyMap, TopicsError> {
    Ok(model.top_keywords(topic, topn)?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

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

    fn stub() -> StubModel {
        StubModel(vec![
            vec![("경제", 0.5), ("금리", 0.3), ("환율", 0.001)],
            vec![("경제", 0.2), ("수출", 0.4)],
        ])
    }

    #[test]
    fn test_shared_token_weights_are_summed() {
        let map = combine(&stub(), 2, 50, 0.0).unwrap();
        assert_eq!(map.len(), 4);
        assert!((map["경제"] - 0.7).abs() < 1e-12);
        assert!((map["수출"] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_min_weight_filters_before_summing() {
        let map = combine(&stub(), 2, 50, 0.25).unwrap();
        assert!(!map.contains_key("환율"));
        // only topic 0's weight survives for the shared token
        assert!((map["경제"] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_top_per_topic_limits_contribution() {
        let map = combine(&stub(), 2, 1, 0.0).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["경제"]);
        assert!((map["경제"] - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_single_topic_map() {
        let map = single_topic(&stub(), 1, 10).unwrap();
        assert_eq!(map.len(), 2);
        assert!((map["수출"] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_single_topic_out_of_range() {
        assert!(single_topic(&stub(), 5, 10).is_err());
    }
}
