//! Stable local-region discovery via randomized-feature consensus.

use ndarray::ArrayView2;
use rustc_hash::FxHashMap;

use lscp_core::config::LscpConfig;
use lscp_core::errors::EnsembleError;

use crate::neighbors::KnnIndex;
use crate::sampling::{sample_feature_indices, SeedStream};

/// Find the stable local region of every test row.
///
/// Runs `config.n_iterations` passes, each over a freshly sampled feature
/// subset: the `effective_region_size()` nearest training rows are
/// recorded for every test row, and after all passes only training
/// indices seen in strictly more than `config.consensus_threshold()`
/// passes are kept. This filters out neighbors that are artifacts of a
/// single feature subset.
///
/// A test row with no stable neighbor yields an empty region; callers
/// must tolerate that rather than treat it as an error.
pub fn find_local_regions(
    train_norm: ArrayView2<'_, f64>,
    test_norm: ArrayView2<'_, f64>,
    config: &LscpConfig,
) -> Result<Vec<Vec<usize>>, EnsembleError> {
    let n_test = test_norm.nrows();
    let d = train_norm.ncols();
    let region_size = config.effective_region_size();
    let threshold = config.consensus_threshold();
    let seeds = SeedStream::new(config.random_seed);

    let min_features = ((d as f64 * config.local_min_features).floor() as usize).max(1);
    let max_features = ((d as f64 * config.local_max_features).floor() as usize).min(d);

    let all_features: Vec<usize> = (0..d).collect();
    let mut counts: Vec<FxHashMap<usize, usize>> = vec![FxHashMap::default(); n_test];

    for pass in 0..config.n_iterations {
        let mut rng = seeds.rng_for_pass(pass);
        // With very few features the integer bounds collapse (min >= max);
        // the pass then uses every feature instead of failing.
        let features = if min_features < max_features {
            sample_feature_indices(&mut rng, d, min_features, max_features)?
        } else {
            all_features.clone()
        };

        let index = KnnIndex::build(train_norm, &features);
        for (row, hits) in index.query(test_norm, region_size).iter().enumerate() {
            let row_counts = &mut counts[row];
            for hit in hits {
                *row_counts.entry(hit.row).or_insert(0) += 1;
            }
        }
    }

    Ok(counts
        .into_iter()
        .map(|row_counts| {
            let mut region: Vec<usize> = row_counts
                .into_iter()
                .filter(|&(_, count)| count > threshold)
                .map(|(train_row, _)| train_row)
                .collect();
            region.sort_unstable();
            region
        })
        .collect())
}
