//! Radius profile collaborator.
//!
//! A radius profile is a sampled scalar function over a time domain. When
//! one is attached to a [`super::SpiralSampler`] it overrides the linear
//! default-radius interpolation, which allows non-monotonic ("wobbly")
//! radius shapes along the spiral.

/// A sampled scalar function over a declared `[t_min, t_max]` domain.
pub trait RadiusProfile {
    /// Declared `(t_min, t_max)` domain of the profile.
    fn domain(&self) -> (f64, f64);

    /// Sample the profile at `t`. Implementations decide out-of-domain
    /// behavior (the bundled profile clamps to its end keys).
    fn sample(&self, t: f64) -> f64;
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("radius profile requires at least one key")]
    EmptyKeys,
    #[error("radius profile keys must be finite")]
    NonFiniteKeys,
    #[error("radius profile keys must be sorted by time")]
    UnsortedKeys,
}

/// Piecewise-linear radius profile over sorted `(t, value)` keys.
///
/// Sampling between two keys interpolates linearly; sampling outside the
/// key range clamps to the first or last value.
#[derive(Debug, Clone)]
pub struct PiecewiseLinearProfile {
    keys: Vec<(f64, f64)>,
}

impl PiecewiseLinearProfile {
    /// Build a profile from `(t, value)` keys sorted by ascending `t`.
    pub fn new(keys: Vec<(f64, f64)>) -> Result<Self, ProfileError> {
        if keys.is_empty() {
            return Err(ProfileError::EmptyKeys);
        }
        if keys.iter().any(|&(t, v)| !t.is_finite() || !v.is_finite()) {
            return Err(ProfileError::NonFiniteKeys);
        }
        if keys.windows(2).any(|pair| pair[0].0 >= pair[1].0) {
            return Err(ProfileError::UnsortedKeys);
        }
        Ok(Self { keys })
    }
}

impl RadiusProfile for PiecewiseLinearProfile {
    fn domain(&self) -> (f64, f64) {
        // `new` guarantees at least one key.
        (self.keys[0].0, self.keys[self.keys.len() - 1].0)
    }

    fn sample(&self, t: f64) -> f64 {
        let first = self.keys[0];
        let last = self.keys[self.keys.len() - 1];
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }

        let upper = self.keys.partition_point(|&(key_t, _)| key_t <= t);
        let (t0, v0) = self.keys[upper - 1];
        let (t1, v1) = self.keys[upper];
        let span = t1 - t0;
        if span <= 0.0 {
            return v0;
        }
        v0 + (v1 - v0) * ((t - t0) / span)
    }
}
