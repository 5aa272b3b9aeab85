//! Seeded feature sampling for the randomized region-discovery passes.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use lscp_core::errors::EnsembleError;

/// Weyl-sequence increment used to space per-pass seeds.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic per-pass RNG stream.
///
/// Each region-discovery pass draws from its own ChaCha20 generator
/// derived from the base seed and the pass index, so pass results do not
/// depend on the order passes execute in.
#[derive(Debug, Clone, Copy)]
pub struct SeedStream {
    base_seed: u64,
}

impl SeedStream {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// RNG for the given pass index.
    pub fn rng_for_pass(&self, pass: usize) -> ChaCha20Rng {
        let mixed = splitmix64(
            self.base_seed
                .wrapping_add((pass as u64).wrapping_mul(GOLDEN_GAMMA)),
        );
        ChaCha20Rng::seed_from_u64(mixed)
    }
}

/// splitmix64 finalizer; decorrelates consecutive pass seeds.
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Draw a random feature subset.
///
/// The subset size is uniform over `[min_features, max_features)`, with
/// the upper bound exclusive per the upstream bagging convention, and
/// the indices are drawn without replacement from `[0, total_features)`.
/// The returned indices are sorted.
pub fn sample_feature_indices<R: Rng>(
    rng: &mut R,
    total_features: usize,
    min_features: usize,
    max_features: usize,
) -> Result<Vec<usize>, EnsembleError> {
    if min_features >= max_features {
        return Err(EnsembleError::InvalidArgument {
            message: format!(
                "feature sampling bounds are empty: min {min_features} >= max {max_features}"
            ),
        });
    }
    if max_features > total_features {
        return Err(EnsembleError::InvalidArgument {
            message: format!(
                "feature sampling upper bound {max_features} exceeds feature count {total_features}"
            ),
        });
    }

    let k = rng.gen_range(min_features..max_features);
    let mut indices = rand::seq::index::sample(rng, total_features, k).into_vec();
    indices.sort_unstable();
    Ok(indices)
}
