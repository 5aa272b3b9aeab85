//! LSCP ensemble orchestration: fit and decision_function.

use ndarray::{Array1, Array2, ArrayView2, Axis};
use rayon::prelude::*;

use lscp_core::config::LscpConfig;
use lscp_core::detector::Detector;
use lscp_core::errors::EnsembleError;

use crate::competence::select_competent_detectors;
use crate::region::find_local_regions;
use crate::stats::{pearson, standardize};

/// State recorded by `fit`, immutable until the next `fit`.
#[derive(Debug)]
struct Fitted {
    x_norm: Array2<f64>,
    scores_norm: Array2<f64>,
    pseudo_label: Array1<f64>,
    n_features: usize,
}

/// Locally selective combination of parallel outlier ensembles.
///
/// Owns the base detectors, trains them once per [`fit`](Lscp::fit), and
/// combines their scores per query point based on local competence.
pub struct Lscp {
    detectors: Vec<Box<dyn Detector>>,
    config: LscpConfig,
    /// Effective histogram bin count, never above the detector count.
    n_bins: usize,
    fitted: Option<Fitted>,
}

impl Lscp {
    /// Create an ensemble over the given base detectors.
    ///
    /// Fails with `InvalidArgument` for fewer than two detectors or an
    /// out-of-range configuration. An `n_bins` not below the detector
    /// count is reduced to it with a warning rather than rejected, since
    /// it only affects selection granularity.
    pub fn new(
        detectors: Vec<Box<dyn Detector>>,
        config: LscpConfig,
    ) -> Result<Self, EnsembleError> {
        if detectors.len() < 2 {
            return Err(EnsembleError::InvalidArgument {
                message: "ensemble requires more than one base detector".into(),
            });
        }
        config.validate()?;

        let n_clf = detectors.len();
        let mut n_bins = config.n_bins;
        if n_bins >= n_clf {
            tracing::warn!(n_bins, n_clf, "n_bins exceeds detector count, reducing to n_clf");
            n_bins = n_clf;
        }

        Ok(Self {
            detectors,
            config,
            n_bins,
            fitted: None,
        })
    }

    /// Ensemble with the default configuration.
    pub fn with_defaults(detectors: Vec<Box<dyn Detector>>) -> Result<Self, EnsembleError> {
        Self::new(detectors, LscpConfig::default())
    }

    /// Train every base detector and record the standardized training
    /// behavior used later for competence estimation.
    ///
    /// Standardizes `x` column-wise, fits each detector on the
    /// standardized matrix, standardizes the resulting score matrix, and
    /// derives the pseudo ground truth as the row-wise maximum. Calling
    /// `fit` again retrains from scratch and discards prior state.
    pub fn fit(&mut self, x: ArrayView2<'_, f64>) {
        let n_train = x.nrows();
        let n_features = x.ncols();
        let n_clf = self.detectors.len();

        let x_norm = standardize(x);

        let mut train_scores = Array2::zeros((n_train, n_clf));
        for (k, detector) in self.detectors.iter_mut().enumerate() {
            detector.fit(x_norm.view());
            train_scores.column_mut(k).assign(&detector.score(x_norm.view()));
        }
        let scores_norm = standardize(train_scores.view());

        let pseudo_label = scores_norm.map_axis(Axis(1), |row| {
            row.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
        });

        tracing::debug!(n_train, n_features, n_clf, "fitted lscp ensemble");
        self.fitted = Some(Fitted {
            x_norm,
            scores_norm,
            pseudo_label,
            n_features,
        });
    }

    /// Combined anomaly score for every row of `x`.
    ///
    /// Scores share the standardized scale of the individual detectors;
    /// higher means more anomalous. Each scored batch is normalized with
    /// its own column statistics.
    pub fn decision_function(
        &self,
        x: ArrayView2<'_, f64>,
    ) -> Result<Array1<f64>, EnsembleError> {
        let fitted = self.fitted.as_ref().ok_or(EnsembleError::NotFitted {
            operation: "decision_function",
        })?;
        if x.ncols() != fitted.n_features {
            return Err(EnsembleError::DimensionMismatch {
                expected: fitted.n_features,
                actual: x.ncols(),
            });
        }

        let x_test_norm = standardize(x);
        let regions = find_local_regions(fitted.x_norm.view(), x_test_norm.view(), &self.config)?;

        let n_test = x.nrows();
        let n_clf = self.detectors.len();
        let mut test_scores = Array2::zeros((n_test, n_clf));
        for (k, detector) in self.detectors.iter().enumerate() {
            test_scores.column_mut(k).assign(&detector.score(x_test_norm.view()));
        }
        let test_scores_norm = standardize(test_scores.view());

        let scores: Vec<f64> = regions
            .par_iter()
            .enumerate()
            .map(|(row, region)| self.score_row(fitted, &test_scores_norm, row, region))
            .collect();
        Ok(Array1::from_vec(scores))
    }

    /// Final score of one test row: mean of the competent detectors'
    /// standardized test scores.
    fn score_row(
        &self,
        fitted: &Fitted,
        test_scores_norm: &Array2<f64>,
        row: usize,
        region: &[usize],
    ) -> f64 {
        let competence = self.competence_scores(fitted, region);
        let selected =
            select_competent_detectors(&competence, self.n_bins, self.config.n_selected_bins);
        let sum: f64 = selected.iter().map(|&d| test_scores_norm[[row, d]]).sum();
        sum / selected.len() as f64
    }

    /// Pearson competence of every detector inside one local region.
    ///
    /// Regions with fewer than two rows leave the correlation undefined;
    /// every detector then gets a neutral 0.0, which makes the selection
    /// fall back to uniform weighting. Degenerate correlations (constant
    /// scores within the region) likewise map to 0.0 instead of NaN.
    fn competence_scores(&self, fitted: &Fitted, region: &[usize]) -> Vec<f64> {
        let n_clf = self.detectors.len();
        if region.len() < 2 {
            return vec![0.0; n_clf];
        }

        let truth: Vec<f64> = region.iter().map(|&r| fitted.pseudo_label[r]).collect();
        (0..n_clf)
            .map(|d| {
                let local: Vec<f64> =
                    region.iter().map(|&r| fitted.scores_norm[[r, d]]).collect();
                pearson(&truth, &local).unwrap_or(0.0)
            })
            .collect()
    }

    /// Number of base detectors.
    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    /// Always false after construction; kept for `len`/`is_empty` parity.
    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }

    /// Iterate over the base detectors.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Detector> + '_ {
        self.detectors.iter().map(|d| d.as_ref())
    }

    /// Effective histogram bin count after auto-correction.
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    /// The configuration supplied at construction.
    pub fn config(&self) -> &LscpConfig {
        &self.config
    }
}

impl std::ops::Index<usize> for Lscp {
    type Output = dyn Detector;

    fn index(&self, index: usize) -> &Self::Output {
        self.detectors[index].as_ref()
    }
}
