//! Shared constants for the LSCP ensemble.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound on the effective local region size.
pub const REGION_SIZE_MIN: usize = 30;

/// Upper bound on the effective local region size.
pub const REGION_SIZE_MAX: usize = 100;

/// Default number of randomized feature-sampling passes for local-region
/// discovery.
pub const DEFAULT_N_ITERATIONS: usize = 20;

/// Default target neighbor count per pass.
pub const DEFAULT_LOCAL_REGION_SIZE: usize = 30;

/// Default lower bound on the fraction of features drawn per pass.
pub const DEFAULT_MIN_FEATURE_FRACTION: f64 = 0.5;

/// Default upper bound on the fraction of features drawn per pass.
pub const DEFAULT_MAX_FEATURE_FRACTION: f64 = 1.0;

/// Default number of equal-width histogram bins for competence selection.
pub const DEFAULT_N_BINS: usize = 10;

/// Default number of most-populated bins whose detectors are selected.
pub const DEFAULT_N_SELECTED_BINS: usize = 1;

/// Default RNG seed.
pub const DEFAULT_RANDOM_SEED: u64 = 42;
