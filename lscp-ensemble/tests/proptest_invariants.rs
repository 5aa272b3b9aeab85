//! Property-based tests for the statistical primitives.
//!
//! Uses proptest to fuzz-verify:
//!   - Pearson correlation bounds (-1 ≤ r ≤ 1 whenever defined)
//!   - Standardization output finiteness and column means
//!   - Histogram count conservation
//!   - Competence selection bounds and non-emptiness

use ndarray::Array2;
use proptest::prelude::*;

use lscp_ensemble::competence::select_competent_detectors;
use lscp_ensemble::stats::{histogram, pearson, standardize};

fn finite_vec(len: impl Into<prop::collection::SizeRange>) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, len)
}

proptest! {
    /// Pearson correlation, whenever defined, lies in [-1, 1].
    #[test]
    fn prop_pearson_bounded(
        a in finite_vec(2..40),
        b in finite_vec(2..40),
    ) {
        let n = a.len().min(b.len());
        if let Some(r) = pearson(&a[..n], &b[..n]) {
            prop_assert!((-1.0..=1.0).contains(&r), "r out of range: {}", r);
        }
    }

    /// Pearson of a vector with itself is 1 unless the vector is constant.
    #[test]
    fn prop_pearson_self_is_one(a in finite_vec(2..40)) {
        if let Some(r) = pearson(&a, &a) {
            prop_assert!((r - 1.0).abs() < 1e-9, "self-correlation {}", r);
        }
    }

    /// Standardized output is always finite and each column has ~zero mean.
    #[test]
    fn prop_standardize_finite_zero_mean(
        values in finite_vec(6..60),
        n_cols in 1usize..4,
    ) {
        let n_rows = values.len() / n_cols;
        prop_assume!(n_rows >= 2);
        let x = Array2::from_shape_fn((n_rows, n_cols), |(i, j)| values[i * n_cols + j]);
        let z = standardize(x.view());

        prop_assert!(z.iter().all(|v| v.is_finite()));
        for (orig, col) in x.columns().into_iter().zip(z.columns()) {
            let mean_in = orig.sum() / n_rows as f64;
            let var_in = orig.iter().map(|v| (v - mean_in).powi(2)).sum::<f64>() / n_rows as f64;
            // Cancellation dominates when the spread is tiny relative to
            // the magnitude; only assert the mean where it is stable.
            if var_in > 1e-6 * (1.0 + mean_in * mean_in) {
                let mean = col.sum() / n_rows as f64;
                prop_assert!(mean.abs() < 1e-6, "column mean {}", mean);
            }
        }
    }

    /// Histogram counts always sum to the number of observations.
    #[test]
    fn prop_histogram_conserves_counts(
        values in finite_vec(1..50),
        n_bins in 1usize..12,
    ) {
        let (counts, edges) = histogram(&values, n_bins);
        prop_assert_eq!(counts.iter().sum::<usize>(), values.len());
        prop_assert_eq!(edges.len(), n_bins + 1);
    }

    /// Selection over a non-empty finite score vector is non-empty, sorted,
    /// deduplicated, and in range.
    #[test]
    fn prop_selection_nonempty_and_in_range(
        scores in finite_vec(2..16),
        n_bins in 1usize..8,
        n_selected in 1usize..4,
    ) {
        let selected = select_competent_detectors(&scores, n_bins, n_selected);
        prop_assert!(!selected.is_empty());
        prop_assert!(selected.iter().all(|&d| d < scores.len()));
        prop_assert!(selected.windows(2).all(|w| w[0] < w[1]), "not strictly sorted");
    }

    /// All-equal score vectors always select every detector.
    #[test]
    fn prop_equal_scores_select_everyone(
        value in -10.0..10.0f64,
        n in 2usize..12,
        n_bins in 1usize..8,
    ) {
        let scores = vec![value; n];
        let selected = select_competent_detectors(&scores, n_bins, 1);
        prop_assert_eq!(selected.len(), n);
    }
}
