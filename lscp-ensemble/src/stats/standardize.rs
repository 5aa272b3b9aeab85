//! Column-wise standardization (zero mean, unit variance).

use ndarray::{Array2, ArrayView2, Axis};

/// Standardize every column to zero mean and unit (population) variance.
///
/// Zero-variance and non-finite columns map to all-zero columns rather
/// than NaN/Inf, so constant features and degenerate score columns cannot
/// poison downstream correlation.
pub fn standardize(x: ArrayView2<'_, f64>) -> Array2<f64> {
    let n_rows = x.nrows();
    let mut out = Array2::zeros(x.raw_dim());
    if n_rows == 0 {
        return out;
    }

    let n = n_rows as f64;
    for (j, col) in x.axis_iter(Axis(1)).enumerate() {
        let mean = col.sum() / n;
        let variance = col.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        if !variance.is_finite() || variance <= 0.0 {
            continue; // column stays zero
        }
        let stddev = variance.sqrt();
        for (i, &v) in col.iter().enumerate() {
            out[[i, j]] = (v - mean) / stddev;
        }
    }
    out
}
