// File: crates/chart-sampling/src/lib.rs
// Summary: Sampling engine entry point; exports series model, reducers, dispatcher and options boundary.

pub mod config;
pub mod downsample;
pub mod error;
pub mod options;
pub mod point;
pub mod sampler;
pub mod series;

pub use config::{SamplingConfig, SamplingMode, SamplingOverride, SamplingThreshold, DEFAULT_THRESHOLD, MIN_THRESHOLD};
pub use downsample::{average, envelope, lttb, Extremum, Reduce};
pub use error::SamplingError;
pub use options::ChartOptions;
pub use point::Point;
pub use sampler::{apply, apply_override, apply_slice, use_raw, Reducer, Sampled};
pub use series::{Bounds, Series, SeriesType};
