//! Statistical primitives consumed by the ensemble pipeline.

pub mod histogram;
pub mod pearson;
pub mod standardize;

pub use histogram::{argmax_n, histogram};
pub use pearson::pearson;
pub use standardize::standardize;
