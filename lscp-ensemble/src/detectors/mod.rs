//! Reference base detectors.
//!
//! Minimal detectors usable as ensemble members out of the box. Any type
//! implementing [`lscp_core::detector::Detector`] works equally well;
//! these exist so the crate is exercisable without external models.

pub mod knn_distance;
pub mod zscore;

pub use knn_distance::KnnDistanceDetector;
pub use zscore::ZScoreDetector;
