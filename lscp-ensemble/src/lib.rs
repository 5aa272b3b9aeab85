//! Locally Selective Combination in Parallel (LSCP) outlier ensembles.
//!
//! Combines a set of trained base detectors by estimating, per query
//! point, which detectors are most competent in that point's local
//! neighborhood, then averaging the competent detectors' standardized
//! scores.
//!
//! The pipeline: repeated randomized-feature nearest-neighbor passes
//! discover a consensus local region for each query point; Pearson
//! correlation between each detector's local training scores and a pseudo
//! ground truth (row-wise maximum of the standardized training scores)
//! ranks detector competence; the detectors in the most populated
//! histogram bin(s) of the competence vector are selected and their test
//! scores averaged.

pub mod competence;
pub mod detectors;
pub mod neighbors;
pub mod region;
pub mod sampling;
pub mod scorer;
pub mod stats;

pub use lscp_core::config::LscpConfig;
pub use lscp_core::detector::Detector;
pub use lscp_core::errors::EnsembleError;
pub use lscp_core::tracing::init_tracing;
pub use scorer::Lscp;
