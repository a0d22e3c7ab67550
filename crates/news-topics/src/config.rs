//! Topic configuration.

use serde::{Deserialize, Serialize};

/// Master configuration for topic modeling and its derived artifacts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicsConfig {
    /// Model fitting settings
    #[serde(default)]
    pub model: LdaConfig,

    /// Label rendering settings
    #[serde(default)]
    pub labeling: LabelingConfig,

    /// Word-cloud frequency settings
    #[serde(default)]
    pub frequency: FrequencyConfig,

    /// Related document settings
    #[serde(default)]
    pub related: RelatedConfig,
}

impl TopicsConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.model.validate()?;
        self.labeling.validate()?;
        self.frequency.validate()?;
        self.related.validate()
    }
}

/// LDA fitting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LdaConfig {
    /// Number of latent topics
    #[serde(default = "default_num_topics")]
    pub num_topics: usize,

    /// Gibbs sweeps over the corpus per chain. Weights are averaged over
    /// the second half.
    #[serde(default = "default_passes")]
    pub passes: usize,

    /// Independent chains; the one that best explains the corpus is kept
    #[serde(default = "default_restarts")]
    pub restarts: usize,

    /// Document-topic prior. None means 1 / num_topics.
    #[serde(default)]
    pub alpha: Option<f64>,

    /// Topic-word prior
    #[serde(default = "default_beta")]
    pub beta: f64,

    /// Fixed RNG seed for reproducible fits
    #[serde(default)]
    pub seed: Option<u64>,

    /// Document-topic weights below this are not reported
    #[serde(default = "default_minimum_probability")]
    pub minimum_probability: f64,
}

impl Default for LdaConfig {
    fn default() -> Self {
        Self {
            num_topics: default_num_topics(),
            passes: default_passes(),
            restarts: default_restarts(),
            alpha: None,
            beta: default_beta(),
            seed: None,
            minimum_probability: default_minimum_probability(),
        }
    }
}

fn default_num_topics() -> usize {
    5
}
fn default_passes() -> usize {
    50
}
fn default_restarts() -> usize {
    4
}
fn default_beta() -> f64 {
    0.01
}
fn default_minimum_probability() -> f64 {
    0.01
}

impl LdaConfig {
    /// Effective document-topic prior.
    pub fn alpha(&self) -> f64 {
        self.alpha
            .unwrap_or_else(|| 1.0 / self.num_topics.max(1) as f64)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.num_topics < 2 {
            return Err(format!("num_topics must be >= 2, got {}", self.num_topics));
        }
        if self.passes == 0 {
            return Err("passes must be >= 1".to_string());
        }
        if self.restarts == 0 {
            return Err("restarts must be >= 1".to_string());
        }
        if let Some(alpha) = self.alpha {
            if alpha.is_nan() || alpha <= 0.0 {
                return Err(format!("alpha must be > 0, got {alpha}"));
            }
        }
        if self.beta.is_nan() || self.beta <= 0.0 {
            return Err(format!("beta must be > 0, got {}", self.beta));
        }
        if !(0.0..1.0).contains(&self.minimum_probability) {
            return Err(format!(
                "minimum_probability must be in [0, 1), got {}",
                self.minimum_probability
            ));
        }
        Ok(())
    }
}

/// Topic labeling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelingConfig {
    /// Keywords per label
    #[serde(default = "default_topn")]
    pub topn: usize,

    /// Enrich each keyword through the sense lookup
    #[serde(default)]
    pub contextual: bool,

    /// Maximum label length in characters
    #[serde(default = "default_max_label_length")]
    pub max_label_length: usize,
}

impl Default for LabelingConfig {
    fn default() -> Self {
        Self {
            topn: default_topn(),
            contextual: false,
            max_label_length: default_max_label_length(),
        }
    }
}

fn default_topn() -> usize {
    5
}
fn default_max_label_length() -> usize {
    80
}

impl LabelingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.topn == 0 {
            return Err("labeling.topn must be >= 1".to_string());
        }
        if self.max_label_length == 0 {
            return Err("labeling.max_label_length must be >= 1".to_string());
        }
        Ok(())
    }
}

/// Word-cloud frequency configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyConfig {
    /// Keywords taken from each topic for the combined map
    #[serde(default = "default_top_per_topic")]
    pub top_per_topic: usize,

    /// Weights below this are dropped before summing
    #[serde(default)]
    pub min_weight: f64,

    /// Keywords in a single-topic map
    #[serde(default = "default_single_topic_topn")]
    pub single_topic_topn: usize,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self {
            top_per_topic: default_top_per_topic(),
            min_weight: 0.0,
            single_topic_topn: default_single_topic_topn(),
        }
    }
}

fn default_top_per_topic() -> usize {
    50
}
fn default_single_topic_topn() -> usize {
    10
}

impl FrequencyConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.min_weight < 0.0 {
            return Err(format!(
                "frequency.min_weight must be >= 0, got {}",
                self.min_weight
            ));
        }
        Ok(())
    }
}

/// Related document configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedConfig {
    /// Membership weight a document must exceed
    #[serde(default = "default_related_threshold")]
    pub threshold: f64,

    /// Maximum documents per topic
    #[serde(default = "default_related_limit")]
    pub limit: usize,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            threshold: default_related_threshold(),
            limit: default_related_limit(),
        }
    }
}

fn default_related_threshold() -> f64 {
    0.2
}
fn default_related_limit() -> usize {
    10
}

impl RelatedConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..1.0).contains(&self.threshold) {
            return Err(format!(
                "related.threshold must be in [0, 1), got {}",
                self.threshold
            ));
        }
        Ok(())
    }
}
