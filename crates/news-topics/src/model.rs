//! Latent Dirichlet Allocation by collapsed Gibbs sampling.
//!
//! Fitting is stochastic: without a fixed seed, two fits of the same corpus
//! may order topics differently and differ slightly in weights. With
//! `seed` set, a fit is reproducible.
//!
//! Each fit runs `restarts` independent chains. A chain averages its
//! topic-word and document-topic weights over the sweeps after burn-in (the
//! first half of `passes`); the chain with the highest corpus log-likelihood
//! under its averaged weights becomes the model.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::LdaConfig;
use crate::error::TopicsError;
use crate::vocabulary::Vocabulary;

/// Read access to per-topic keyword rankings.
pub trait KeywordSource {
    fn num_topics(&self) -> usize;

    /// Top `n` `(token, weight)` pairs of a topic, weight descending.
    fn top_keywords(&self, topic: usize, n: usize) -> Result<Vec<(String, f64)>, TopicsError>;
}

/// A fitted topic model.
///
/// Immutable after fitting; re-fitting produces a new model.
#[derive(Debug, Clone)]
pub struct TopicModel {
    vocabulary: Vocabulary,
    /// topics x vocabulary, each row sums to 1
    topic_word: Vec<Vec<f64>>,
    /// documents x topics, each row sums to 1
    doc_topic: Vec<Vec<f64>>,
    minimum_probability: f64,
}

impl TopicModel {
    /// Fit a model over tokenized documents.
    pub fn fit(documents: &[Vec<String>], config: &LdaConfig) -> Result<Self, TopicsError> {
        config.validate().map_err(TopicsError::InvalidConfig)?;
        if documents.is_empty() {
            return Err(TopicsError::EmptyCorpus);
        }

        let vocabulary = Vocabulary::build(documents);
        if vocabulary.is_empty() {
            return Err(TopicsError::EmptyVocabulary);
        }

        // Expand each bag of words back into a flat word id sequence.
        let docs: Vec<Vec<usize>> = documents
            .iter()
            .map(|doc| {
                vocabulary
                    .doc2bow(doc)
                    .into_iter()
                    .flat_map(|(id, count)| std::iter::repeat(id).take(count as usize))
                    .collect()
            })
            .collect();

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let mut best: Option<ChainEstimate> = None;
        for chain in 0..config.restarts {
            let estimate = run_chain(&docs, vocabulary.len(), config, &mut rng)?;
            debug!(
                chain = chain + 1,
                restarts = config.restarts,
                log_likelihood = estimate.log_likelihood,
                "LDA chain finished"
            );
            let better = match &best {
                Some(current) => estimate.log_likelihood > current.log_likelihood,
                None => true,
            };
            if better {
                best = Some(estimate);
            }
        }
        let best = best.ok_or_else(|| TopicsError::InvalidConfig("restarts must be >= 1".into()))?;

        info!(
            documents = docs.len(),
            vocabulary = vocabulary.len(),
            topics = config.num_topics,
            passes = config.passes,
            restarts = config.restarts,
            log_likelihood = best.log_likelihood,
            "Fitted topic model"
        );

        Ok(Self {
            vocabulary,
            topic_word: best.topic_word,
            doc_topic: best.doc_topic,
            minimum_probability: config.minimum_probability,
        })
    }

    pub fn num_documents(&self) -> usize {
        self.doc_topic.len()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Full word distribution of a topic, indexed by token id.
    pub fn topic_distribution(&self, topic: usize) -> Result<&[f64], TopicsError> {
        self.topic_word
            .get(topic)
            .map(Vec::as_slice)
            .ok_or(TopicsError::TopicOutOfRange {
                topic,
                num_topics: self.topic_word.len(),
            })
    }

    /// Topic memberships of a document at or above the reporting threshold,
    /// in topic id order.
    pub fn document_topics(&self, doc: usize) -> Result<Vec<(usize, f64)>, TopicsError> {
        let row = self
            .doc_topic
            .get(doc)
            .ok_or(TopicsError::DocumentOutOfRange {
                doc,
                num_documents: self.doc_topic.len(),
            })?;

        Ok(row
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, w)| w >= self.minimum_probability)
            .collect())
    }
}

impl KeywordSource for TopicModel {
    fn num_topics(&self) -> usize {
        self.topic_word.len()
    }

    fn top_keywords(&self, topic: usize, n: usize) -> Result<Vec<(String, f64)>, TopicsError> {
        let row = self.topic_distribution(topic)?;
        let mut ranked: Vec<(usize, f64)> = row.iter().copied().enumerate().collect();
        // Stable sort keeps lower token ids first among equal weights.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        Ok(ranked
            .into_iter()
            .take(n)
            .filter_map(|(id, w)| self.vocabulary.token(id).map(|t| (t.to_string(), w)))
            .collect())
    }
}

/// Averaged weights of one Gibbs chain.
struct ChainEstimate {
    topic_word: Vec<Vec<f64>>,
    doc_topic: Vec<Vec<f64>>,
    log_likelihood: f64,
}

/// Run one collapsed Gibbs chain from a random assignment.
fn run_chain(
    docs: &[Vec<usize>],
    v: usize,
    config: &LdaConfig,
    rng: &mut StdRng,
) -> Result<ChainEstimate, TopicsError> {
    let k = config.num_topics;
    let alpha = config.alpha();
    let beta = config.beta;
    let vb = v as f64 * beta;

    let mut ndk = vec![vec![0usize; k]; docs.len()];
    let mut nkw = vec![vec![0usize; v]; k];
    let mut nk = vec![0usize; k];
    let mut z: Vec<Vec<usize>> = Vec::with_capacity(docs.len());

    for (d, doc) in docs.iter().enumerate() {
        let assignments: Vec<usize> = doc
            .iter()
            .map(|&w| {
                let t = rng.random_range(0..k);
                ndk[d][t] += 1;
                nkw[t][w] += 1;
                nk[t] += 1;
                t
            })
            .collect();
        z.push(assignments);
    }

    let burn_in = config.passes / 2;
    let mut topic_word = vec![vec![0.0f64; v]; k];
    let mut doc_topic = vec![vec![0.0f64; k]; docs.len()];
    let mut weights = vec![0.0f64; k];

    for pass in 0..config.passes {
        for (d, doc) in docs.iter().enumerate() {
            for (i, &w) in doc.iter().enumerate() {
                let old = z[d][i];
                ndk[d][old] -= 1;
                nkw[old][w] -= 1;
                nk[old] -= 1;

                // p(t) ∝ (ndk[d][t] + α) * (nkw[t][w] + β) / (nk[t] + Vβ)
                for (t, weight) in weights.iter_mut().enumerate() {
                    *weight = (ndk[d][t] as f64 + alpha) * (nkw[t][w] as f64 + beta)
                        / (nk[t] as f64 + vb);
                }
                let new = WeightedIndex::new(&weights)
                    .map_err(|e| TopicsError::Sampling(e.to_string()))?
                    .sample(rng);

                z[d][i] = new;
                ndk[d][new] += 1;
                nkw[new][w] += 1;
                nk[new] += 1;
            }
        }

        if pass >= burn_in {
            // θ[d][t] = (ndk + α) / (N_d + Kα), φ[t][w] = (nkw + β) / (nk + Vβ)
            for (d, doc) in docs.iter().enumerate() {
                let denom = doc.len() as f64 + k as f64 * alpha;
                for (t, acc) in doc_topic[d].iter_mut().enumerate() {
                    *acc += (ndk[d][t] as f64 + alpha) / denom;
                }
            }
            for (t, row) in topic_word.iter_mut().enumerate() {
                let denom = nk[t] as f64 + vb;
                for (w, acc) in row.iter_mut().enumerate() {
                    *acc += (nkw[t][w] as f64 + beta) / denom;
                }
            }
        }
    }

    let samples = (config.passes - burn_in) as f64;
    for row in topic_word.iter_mut().chain(doc_topic.iter_mut()) {
        for value in row.iter_mut() {
            *value /= samples;
        }
    }

    let log_likelihood = docs
        .iter()
        .enumerate()
        .flat_map(|(d, doc)| doc.iter().map(move |&w| (d, w)))
        .map(|(d, w)| {
            (0..k)
                .map(|t| doc_topic[d][t] * topic_word[t][w])
                .sum::<f64>()
                .ln()
        })
        .sum();

    Ok(ChainEstimate {
        topic_word,
        doc_topic,
        log_likelihood,
    })
}
