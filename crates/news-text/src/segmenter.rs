//! Morpheme segmentation.
//!
//! Segmentation is an external capability: a real morphological analyser can be
//! plugged in by implementing [`Segmenter`]. [`ParticleSegmenter`] is the
//! built-in fallback and only detaches trailing particles from each word.

/// Splits cleaned text into morphemes.
pub trait Segmenter: Send + Sync {
    /// Segment text into morphemes, in reading order.
    fn morphs(&self, text: &str) -> Vec<String>;
}

/// Whitespace-only segmentation.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn morphs(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }
}

/// Trailing particles, checked longest first.
const PARTICLES: &[&str] = &[
    "에서는", "으로는", "에게서", "이라고", "에서", "에게", "으로", "까지", "부터", "처럼", "보다",
    "라고", "에는", "에도", "은", "는", "이", "가", "을", "를", "에", "의", "와", "과", "도", "로",
    "만",
];

/// Splits words on whitespace and detaches trailing particles.
///
/// `정부에서는` becomes `정부`, `에서는`. Stripping repeats until no particle
/// matches, so a stem never ends in a known particle. A one-character particle
/// is only detached when at least two characters of stem remain, which keeps
/// short nouns such as `나이` intact.
#[derive(Debug, Clone)]
pub struct ParticleSegmenter {
    particles: Vec<&'static str>,
}

impl ParticleSegmenter {
    pub fn new() -> Self {
        let mut particles = PARTICLES.to_vec();
        particles.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));
        Self { particles }
    }

    fn split_word(&self, word: &str) -> Vec<String> {
        let mut stem = word;
        let mut suffixes: Vec<&str> = Vec::new();

        while let Some(particle) = self.matching_particle(stem) {
            stem = &stem[..stem.len() - particle.len()];
            suffixes.push(particle);
        }

        let mut out = Vec::with_capacity(suffixes.len() + 1);
        out.push(stem.to_string());
        out.extend(suffixes.into_iter().rev().map(String::from));
        out
    }

    fn matching_particle(&self, stem: &str) -> Option<&'static str> {
        let stem_chars = stem.chars().count();
        self.particles.iter().copied().find(|particle| {
            let particle_chars = particle.chars().count();
            let min_stem = if particle_chars == 1 { 2 } else { 1 };
            stem.ends_with(particle) && stem_chars >= particle_chars + min_stem
        })
    }
}

impl Default for ParticleSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for ParticleSegmenter {
    fn morphs(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .flat_map(|word| self.split_word(word))
            .collect()
    }
}
