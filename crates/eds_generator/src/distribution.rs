use rand::Rng;
use rand_distr::StandardNormal;
use serde::Serialize;

/// A folded normal distribution over positive integers.
///
/// Samples are `max(1, round(|x|))` with `x ~ Normal(mean, stdev)`,
/// clamped to `cap` if one is set. The standard deviation may take any
/// finite value; its sign is irrelevant after folding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionSampler {
    mean: f64,
    stdev: f64,
    cap: Option<usize>,
}

impl DistributionSampler {
    pub fn new(mean: f64, stdev: f64) -> Self {
        DistributionSampler { mean, stdev, cap: None }
    }

    pub fn with_cap(mut self, cap: Option<usize>) -> Self {
        self.cap = cap;
        self
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stdev(&self) -> f64 {
        self.stdev
    }

    pub fn cap(&self) -> Option<usize> {
        self.cap
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        self.sample_capped(rng, None)
    }

    /// Like [`sample`](Self::sample), but never exceeds `limit` either.
    /// Exactly one normal deviate is drawn per call.
    pub fn sample_capped<R: Rng>(&self, rng: &mut R, limit: Option<usize>) -> usize {
        let z: f64 = rng.sample(StandardNormal);
        let x = (self.mean + self.stdev * z).abs().round();
        // float-to-int casts saturate, NaN becomes 0
        let mut n = (x as usize).max(1);
        if let Some(cap) = self.cap {
            n = n.min(cap.max(1));
        }
        if let Some(limit) = limit {
            n = n.min(limit.max(1));
        }
        n
    }

    /// The distribution used one nesting level deeper: `log2(mean)` for
    /// means of at least one, the cap halved (rounding up).
    pub fn reduce(&self) -> Self {
        DistributionSampler {
            mean: if self.mean >= 1. { self.mean.log2() } else { self.mean },
            stdev: self.stdev,
            cap: self.cap.map(|c| c.div_ceil(2).max(1)),
        }
    }
}

/// Element length and segment cardinality distributions of one
/// nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionSettings {
    pub element_length: DistributionSampler,
    pub cardinality: DistributionSampler,
}

impl DistributionSettings {
    pub fn new(element_length: DistributionSampler, cardinality: DistributionSampler) -> Self {
        DistributionSettings { element_length, cardinality }
    }

    pub fn reduce(&self) -> Self {
        DistributionSettings {
            element_length: self.element_length.reduce(),
            cardinality: self.cardinality.reduce(),
        }
    }

    /// Number of alternatives in a degenerate segment.
    pub fn sample_cardinality<R: Rng>(&self, rng: &mut R) -> usize {
        self.cardinality.sample(rng)
    }

    /// Length of one alternative, bounded by the remaining `budget`.
    pub fn sample_element_length<R: Rng>(&self, rng: &mut R, budget: Option<usize>) -> usize {
        self.element_length.sample_capped(rng, budget)
    }
}

impl Default for DistributionSettings {
    fn default() -> Self {
        DistributionSettings {
            element_length: DistributionSampler::new(5., 2.5),
            cardinality: DistributionSampler::new(5., 2.5),
        }
    }
}
