//! Competent-detector selection via histogram-mode binning.

use crate::stats::{argmax_n, histogram};

/// Select the most competent detectors from a per-detector score vector.
///
/// Bins the scores into `n_bins` equal-width bins, takes the `n_selected`
/// most populated bins, and returns every detector whose score falls
/// inside a selected bin, boundaries included on both ends. A score
/// sitting exactly on a shared edge belongs to both adjacent bins, so the
/// selection can exceed one bin's occupancy. The result is the sorted,
/// deduplicated union across selected bins.
///
/// All-equal scores collapse the histogram to a single occupied bin and
/// select every detector, so the downstream average degrades to a plain
/// mean.
///
/// Scores must be finite; callers sanitize degenerate correlations to 0.0
/// before selection.
pub fn select_competent_detectors(scores: &[f64], n_bins: usize, n_selected: usize) -> Vec<usize> {
    if scores.is_empty() {
        return Vec::new();
    }

    let (counts, edges) = histogram(scores, n_bins);
    let top_bins = argmax_n(&counts, n_selected);

    let mut selected = Vec::new();
    for bin in top_bins {
        let low = edges[bin];
        let high = edges[bin + 1];
        for (detector, &score) in scores.iter().enumerate() {
            if score >= low && score <= high {
                selected.push(detector);
            }
        }
    }
    selected.sort_unstable();
    selected.dedup();
    selected
}
