//! Configuration for the LSCP ensemble combiner.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LOCAL_REGION_SIZE, DEFAULT_MAX_FEATURE_FRACTION, DEFAULT_MIN_FEATURE_FRACTION,
    DEFAULT_N_BINS, DEFAULT_N_ITERATIONS, DEFAULT_N_SELECTED_BINS, DEFAULT_RANDOM_SEED,
    REGION_SIZE_MAX, REGION_SIZE_MIN,
};
use crate::errors::EnsembleError;

/// Configuration for the LSCP ensemble combiner.
///
/// Immutable after construction; validated once when the ensemble is
/// built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LscpConfig {
    /// Number of randomized feature-sampling passes for local-region
    /// discovery (default: 20).
    pub n_iterations: usize,
    /// Target neighbor count per pass (default: 30). The effective value
    /// is clamped into [`REGION_SIZE_MIN`, `REGION_SIZE_MAX`] at scoring
    /// time.
    pub local_region_size: usize,
    /// Lower bound on the fraction of features drawn per pass
    /// (default: 0.5).
    pub local_min_features: f64,
    /// Upper bound on the fraction of features drawn per pass
    /// (default: 1.0).
    pub local_max_features: f64,
    /// Number of equal-width histogram bins for competence selection
    /// (default: 10). Auto-reduced to the detector count when it is not
    /// smaller.
    pub n_bins: usize,
    /// Number of most-populated bins whose detectors are selected
    /// (default: 1).
    pub n_selected_bins: usize,
    /// Seed for the per-pass RNG stream (default: 42).
    pub random_seed: u64,
}

impl Default for LscpConfig {
    fn default() -> Self {
        Self {
            n_iterations: DEFAULT_N_ITERATIONS,
            local_region_size: DEFAULT_LOCAL_REGION_SIZE,
            local_min_features: DEFAULT_MIN_FEATURE_FRACTION,
            local_max_features: DEFAULT_MAX_FEATURE_FRACTION,
            n_bins: DEFAULT_N_BINS,
            n_selected_bins: DEFAULT_N_SELECTED_BINS,
            random_seed: DEFAULT_RANDOM_SEED,
        }
    }
}

impl LscpConfig {
    /// Minimum pass count a training row must exceed to stay in a local
    /// region (integer half of the pass count).
    pub fn consensus_threshold(&self) -> usize {
        self.n_iterations / 2
    }

    /// Effective region size, clamped into
    /// [`REGION_SIZE_MIN`, `REGION_SIZE_MAX`].
    pub fn effective_region_size(&self) -> usize {
        self.local_region_size.clamp(REGION_SIZE_MIN, REGION_SIZE_MAX)
    }

    /// Validate field ranges.
    pub fn validate(&self) -> Result<(), EnsembleError> {
        if self.n_iterations == 0 {
            return Err(EnsembleError::InvalidArgument {
                message: "n_iterations must be at least 1".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.local_min_features)
            || !(0.0..=1.0).contains(&self.local_max_features)
        {
            return Err(EnsembleError::InvalidArgument {
                message: "feature fractions must lie in [0.0, 1.0]".into(),
            });
        }
        if self.local_min_features > self.local_max_features {
            return Err(EnsembleError::InvalidArgument {
                message: format!(
                    "local_min_features {} exceeds local_max_features {}",
                    self.local_min_features, self.local_max_features
                ),
            });
        }
        if self.n_bins == 0 {
            return Err(EnsembleError::InvalidArgument {
                message: "n_bins must be at least 1".into(),
            });
        }
        if self.n_selected_bins == 0 || self.n_selected_bins > self.n_bins {
            return Err(EnsembleError::InvalidArgument {
                message: format!(
                    "n_selected_bins {} must lie in [1, n_bins = {}]",
                    self.n_selected_bins, self.n_bins
                ),
            });
        }
        Ok(())
    }
}
