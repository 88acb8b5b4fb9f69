// File: crates/chart-sampling/src/error.rs
// Summary: Error type for series validation and options parsing.

use thiserror::Error;

/// Errors surfaced by the sampling engine.
///
/// Malformed sampling *values* never error; they normalize. Only structurally
/// invalid series (checked before a reducer runs) and unparseable option
/// documents are reported.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("series x-values must be non-decreasing: x[{index}] = {next} follows {prev}")]
    UnsortedX { index: usize, prev: f64, next: f64 },

    #[error("series x-value at index {index} is not finite")]
    NonFiniteX { index: usize },

    #[error("invalid chart options: {0}")]
    Options(#[from] serde_json::Error),
}
