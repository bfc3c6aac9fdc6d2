//! Per-metric jitter parameters

use super::source::DeltaSource;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum JitterError {
    #[error("Delta range is inverted: min {min} > max {max}")]
    InvertedDelta { min: f64, max: f64 },

    #[error("Domain is inverted: lo {lo} > hi {hi}")]
    InvertedDomain { lo: f64, hi: f64 },

    #[error("Jitter parameters must be numbers and deltas must be finite")]
    NotFinite,

    #[error("Delta range is too wide to sample: {min}..={max}")]
    DeltaSpanOverflow { min: f64, max: f64 },
}

/// Widest `max_delta - min_delta` the sampler accepts. Uniform sampling
/// divides the span by a number just below one, so spans near `f64::MAX`
/// overflow.
pub const MAX_DELTA_SPAN: f64 = f64::MAX / 2.0;

/// Bounded random walk parameters: each tick adds `uniform(min_delta, max_delta)`
/// and clamps the result into `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterSpec {
    min_delta: f64,
    max_delta: f64,
    lo: f64,
    hi: f64,
}

impl JitterSpec {
    pub fn new(min_delta: f64, max_delta: f64, lo: f64, hi: f64) -> Result<Self, JitterError> {
        if !min_delta.is_finite() || !max_delta.is_finite() || lo.is_nan() || hi.is_nan() {
            return Err(JitterError::NotFinite);
        }
        if min_delta > max_delta {
            return Err(JitterError::InvertedDelta {
                min: min_delta,
                max: max_delta,
            });
        }
        if max_delta - min_delta > MAX_DELTA_SPAN {
            return Err(JitterError::DeltaSpanOverflow {
                min: min_delta,
                max: max_delta,
            });
        }
        if lo > hi {
            return Err(JitterError::InvertedDomain { lo, hi });
        }
        Ok(Self {
            min_delta,
            max_delta,
            lo,
            hi,
        })
    }

    pub fn min_delta(&self) -> f64 {
        self.min_delta
    }

    pub fn max_delta(&self) -> f64 {
        self.max_delta
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    #[cfg(test)]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lo, self.hi)
    }

    /// One tick: perturb `value` and clamp back into the domain.
    pub fn step(&self, value: f64, source: &mut dyn DeltaSource) -> f64 {
        let delta = source.sample(self.min_delta, self.max_delta);
        self.clamp(value + delta)
    }
}
