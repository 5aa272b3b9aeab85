//! Maximum-|z| base detector.

use ndarray::{Array1, ArrayView2, Axis};
use statrs::distribution::{ContinuousCDF, Normal};

use lscp_core::detector::Detector;

/// Scores each row by its largest per-feature |z| relative to the
/// training column statistics, mapped through the standard normal CDF so
/// scores land in [0, 1).
#[derive(Debug, Default)]
pub struct ZScoreDetector {
    column_stats: Option<ColumnStats>,
}

#[derive(Debug)]
struct ColumnStats {
    means: Vec<f64>,
    stddevs: Vec<f64>,
}

impl ZScoreDetector {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_abs_z(&self, stats: &ColumnStats, row: ndarray::ArrayView1<'_, f64>) -> f64 {
        row.iter()
            .enumerate()
            .map(|(j, &v)| {
                if stats.stddevs[j] > 0.0 {
                    ((v - stats.means[j]) / stats.stddevs[j]).abs()
                } else {
                    0.0
                }
            })
            .fold(0.0, f64::max)
    }
}

impl Detector for ZScoreDetector {
    fn fit(&mut self, x: ArrayView2<'_, f64>) {
        let n = x.nrows().max(1) as f64;
        let mut means = Vec::with_capacity(x.ncols());
        let mut stddevs = Vec::with_capacity(x.ncols());
        for col in x.axis_iter(Axis(1)) {
            let mean = col.sum() / n;
            let variance = col.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
            means.push(mean);
            stddevs.push(if variance > 0.0 && variance.is_finite() {
                variance.sqrt()
            } else {
                0.0
            });
        }
        self.column_stats = Some(ColumnStats { means, stddevs });
    }

    fn score(&self, x: ArrayView2<'_, f64>) -> Array1<f64> {
        let Some(stats) = &self.column_stats else {
            return Array1::zeros(x.nrows());
        };
        x.axis_iter(Axis(0))
            .map(|row| {
                let z = self.max_abs_z(stats, row);
                match Normal::new(0.0, 1.0) {
                    Ok(normal) => 2.0 * (normal.cdf(z) - 0.5),
                    Err(_) => z,
                }
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "zscore"
    }
}
