//! Brute-force k-nearest-neighbor queries over a feature subset.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ndarray::ArrayView2;
use rayon::prelude::*;

/// A single neighbor hit: training-row index and squared Euclidean
/// distance over the indexed feature subset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub row: usize,
    pub dist_sq: f64,
}

/// Heap entry ordered so the worst candidate sits on top.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    dist_sq: f64,
    row: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.dist_sq == other.dist_sq && self.row == other.row
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap on (distance, row): equal distances evict the higher
        // row index first, so results deterministically favor lower rows.
        self.dist_sq
            .partial_cmp(&other.dist_sq)
            .unwrap_or(Ordering::Equal)
            .then(self.row.cmp(&other.row))
    }
}

/// Brute-force Euclidean k-NN over a training matrix restricted to a
/// subset of feature columns.
pub struct KnnIndex<'a, 'b> {
    train: ArrayView2<'a, f64>,
    features: &'b [usize],
}

impl<'a, 'b> KnnIndex<'a, 'b> {
    /// Build an index over `train` restricted to `features`.
    pub fn build(train: ArrayView2<'a, f64>, features: &'b [usize]) -> Self {
        Self { train, features }
    }

    /// The `k` nearest training rows for every row of `test`, queried in
    /// parallel. Results per row are sorted by (distance, row index); `k`
    /// is capped at the number of training rows.
    pub fn query(&self, test: ArrayView2<'_, f64>, k: usize) -> Vec<Vec<Neighbor>> {
        (0..test.nrows())
            .into_par_iter()
            .map(|row| self.query_row(test, row, k))
            .collect()
    }

    fn query_row(&self, test: ArrayView2<'_, f64>, row: usize, k: usize) -> Vec<Neighbor> {
        let k = k.min(self.train.nrows());
        if k == 0 {
            return Vec::new();
        }

        let mut heap: BinaryHeap<Candidate> = BinaryHeap::with_capacity(k + 1);
        for t in 0..self.train.nrows() {
            let mut dist_sq = 0.0;
            for &f in self.features {
                let d = self.train[[t, f]] - test[[row, f]];
                dist_sq += d * d;
            }
            heap.push(Candidate { dist_sq, row: t });
            if heap.len() > k {
                heap.pop();
            }
        }

        let mut hits = heap.into_vec();
        hits.sort();
        hits.into_iter()
            .map(|c| Neighbor {
                row: c.row,
                dist_sq: c.dist_sq,
            })
            .collect()
    }
}
