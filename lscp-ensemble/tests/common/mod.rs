//! Shared helpers for integration tests.
//!
//! Each test binary compiles this module separately and uses a subset of
//! it.
#![allow(dead_code)]

use ndarray::{Array1, Array2, ArrayView2};

use lscp_ensemble::Detector;

/// Detector returning a fixed per-row score pattern, cycled to the
/// queried row count.
pub struct FixedScoreDetector {
    pattern: Vec<f64>,
}

impl FixedScoreDetector {
    pub fn boxed(pattern: Vec<f64>) -> Box<dyn Detector> {
        Box::new(Self { pattern })
    }
}

impl Detector for FixedScoreDetector {
    fn fit(&mut self, _x: ArrayView2<'_, f64>) {}

    fn score(&self, x: ArrayView2<'_, f64>) -> Array1<f64> {
        (0..x.nrows())
            .map(|i| self.pattern[i % self.pattern.len()])
            .collect()
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Deterministic synthetic dataset: a smooth bulk plus a few rows pushed
/// far out, so detectors have something to disagree about.
pub fn synthetic_data(n_rows: usize, n_cols: usize) -> Array2<f64> {
    let mut x = Array2::zeros((n_rows, n_cols));
    for i in 0..n_rows {
        for j in 0..n_cols {
            let t = (i * 31 + j * 17) % 97;
            x[[i, j]] = (t as f64 * 0.13).sin() + 0.01 * i as f64;
        }
    }
    // Push the last rows far from the bulk.
    for i in n_rows.saturating_sub(3)..n_rows {
        for j in 0..n_cols {
            x[[i, j]] += 25.0;
        }
    }
    x
}
