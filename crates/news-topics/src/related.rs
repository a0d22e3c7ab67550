//! Documents associated with a topic.

use crate::error::TopicsError;
use crate::model::{KeywordSource, TopicModel};

/// Indices of documents whose membership in `topic` exceeds `threshold`,
/// in corpus order, at most `limit` of them.
pub fn related_documents(
    model: &TopicModel,
    topic: usize,
    threshold: f64,
    limit: usize,
) -> Result<Vec<usize>, TopicsError> {
    if topic >= model.num_topics() {
        return Err(TopicsError::TopicOutOfRange {
            topic,
            num_topics: model.num_topics(),
        });
    }

    let mut related = Vec::new();
    for doc in 0..model.num_documents() {
        if related.len() >= limit {
            break;
        }
        let member = model
            .document_topics(doc)?
            .into_iter()
            .any(|(t, weight)| t == topic && weight > threshold);
        if member {
            related.push(doc);
        }
    }
    Ok(related)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LdaConfig;

    fn model() -> TopicModel {
        let finance = ["금리", "은행", "대출", "예금"];
        let sports = ["축구", "선수", "경기", "감독"];
        let docs: Vec<Vec<String>> = (0..8)
            .map(|i| {
                let words = if i % 2 == 0 { &finance } else { &sports };
                words.iter().map(|s| s.to_string()).collect()
            })
            .collect();
        let config = LdaConfig {
            num_topics: 2,
            passes: 100,
            alpha: Some(0.1),
            seed: Some(7),
            ..Default::default()
        };
        TopicModel::fit(&docs, &config).unwrap()
    }

    #[test]
    fn test_related_exceed_threshold_in_corpus_order() {
        let model = model();
        for topic in 0..2 {
            let related = related_documents(&model, topic, 0.2, 10).unwrap();
            assert!(!related.is_empty());
            assert!(related.windows(2).all(|w| w[0] < w[1]));
            for doc in related {
                let weight = model
                    .document_topics(doc)
                    .unwrap()
                    .into_iter()
                    .find(|(t, _)| *t == topic)
                    .map(|(_, w)| w)
                    .unwrap();
                assert!(weight > 0.2);
            }
        }
    }

    #[test]
    fn test_limit_truncates() {
        let model = model();
        let all = related_documents(&model, 0, 0.0, 100).unwrap();
        let capped = related_documents(&model, 0, 0.0, 3).unwrap();
        assert_eq!(capped.len(), 3);
        assert_eq!(capped, all[..3].to_vec());
    }

    #[test]
    fn test_unknown_topic_is_error() {
        assert!(related_documents(&model(), 2, 0.2, 10).is_err());
    }
}
