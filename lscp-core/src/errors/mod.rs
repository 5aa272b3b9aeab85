//! Error types for the LSCP ensemble.

mod ensemble_error;

pub use ensemble_error::EnsembleError;
