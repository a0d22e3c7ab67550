//! Randomized delay between successive requests.
//!
//! The crawler's only backpressure: a bounded random pause before every
//! listing page after the first, every article fetch after the first, and
//! every category after the first.

use std::time::Duration;

use rand::Rng;

/// Bounded random delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    min: Duration,
    max: Duration,
}

impl Pacing {
    /// Create a pacing policy. Bounds are swapped if given in reverse.
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// No delay at all.
    pub fn none() -> Self {
        Self {
            min: Duration::ZERO,
            max: Duration::ZERO,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.max.is_zero()
    }

    /// Draw a delay in `[min, max]`.
    pub fn generate_delay(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        let min_ms = self.min.as_millis() as u64;
        let max_ms = self.max.as_millis() as u64;
        Duration::from_millis(rand::rng().random_range(min_ms..=max_ms))
    }

    /// Sleep for a freshly drawn delay.
    pub async fn pause(&self) {
        let delay = self.generate_delay();
        if !delay.is_zero() {
            tracing::debug!(delay_ms = delay.as_millis() as u64, "Pacing delay");
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(Duration::from_millis(300), Duration::from_millis(1500))
    }
}
