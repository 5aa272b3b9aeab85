//! Base-detector trait.

use ndarray::{Array1, ArrayView2};

/// Trait that every base anomaly detector must implement.
///
/// A detector is a black box to the ensemble: it is trained exactly once
/// per `fit` of the ensemble, on the standardized training matrix, and is
/// afterwards queried for per-row anomaly scores. Higher scores mean more
/// anomalous.
pub trait Detector: Send + Sync {
    /// Train the detector on the given matrix (rows are observations).
    fn fit(&mut self, x: ArrayView2<'_, f64>);

    /// Score every row of the given matrix.
    fn score(&self, x: ArrayView2<'_, f64>) -> Array1<f64>;

    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str {
        "detector"
    }
}
