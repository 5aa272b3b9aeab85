//! k-nearest-neighbor distance base detector.

use ndarray::{Array1, Array2, ArrayView2};

use lscp_core::detector::Detector;

use crate::neighbors::KnnIndex;

/// Scores each row by its mean Euclidean distance to the `k` nearest
/// training rows. Larger distances mean sparser neighborhoods, hence
/// higher anomaly scores.
#[derive(Debug)]
pub struct KnnDistanceDetector {
    k: usize,
    train: Option<Array2<f64>>,
}

impl KnnDistanceDetector {
    /// `k` is capped at the training-row count when scoring.
    pub fn new(k: usize) -> Self {
        Self {
            k: k.max(1),
            train: None,
        }
    }
}

impl Detector for KnnDistanceDetector {
    fn fit(&mut self, x: ArrayView2<'_, f64>) {
        self.train = Some(x.to_owned());
    }

    fn score(&self, x: ArrayView2<'_, f64>) -> Array1<f64> {
        let Some(train) = &self.train else {
            return Array1::zeros(x.nrows());
        };

        let features: Vec<usize> = (0..train.ncols()).collect();
        let index = KnnIndex::build(train.view(), &features);
        index
            .query(x, self.k)
            .into_iter()
            .map(|hits| {
                if hits.is_empty() {
                    return 0.0;
                }
                hits.iter().map(|n| n.dist_sq.sqrt()).sum::<f64>() / hits.len() as f64
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "knn_distance"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_isolated_row_scores_higher() {
        let train = array![[0.0, 0.0], [0.1, 0.0], [0.0, 0.1], [0.1, 0.1]];
        let mut detector = KnnDistanceDetector::new(2);
        detector.fit(train.view());

        let scores = detector.score(array![[0.05, 0.05], [5.0, 5.0]].view());
        assert!(scores[1] > scores[0]);
    }

    #[test]
    fn test_unfitted_detector_scores_zero() {
        let detector = KnnDistanceDetector::new(3);
        let scores = detector.score(array![[1.0, 2.0]].view());
        assert!(scores.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_training_row_scores_near_zero() {
        let train = array![[1.0], [1.0], [1.0]];
        let mut detector = KnnDistanceDetector::new(1);
        detector.fit(train.view());

        let scores = detector.score(array![[1.0]].view());
        assert_eq!(scores[0], 0.0);
    }
}
