// File: crates/chart-sampling/src/sampler.rs
// Summary: Threshold gate and sampling dispatcher (mode -> reducer) with effective-config readout.

use std::borrow::Cow;

use tracing::{debug, trace, warn};

use crate::config::{SamplingConfig, SamplingMode, SamplingOverride, SamplingThreshold};
use crate::downsample::{Average, Envelope, Extremum, Lttb, Reduce};
use crate::error::SamplingError;
use crate::point::Point;
use crate::series::{check_sorted_x, Series};

/// Threshold gate: `true` when raw data is used as-is.
///
/// `none` always passes through; otherwise reduction happens only when the
/// raw length exceeds the threshold.
#[inline]
pub fn use_raw(raw_len: usize, threshold: SamplingThreshold, mode: SamplingMode) -> bool {
    mode == SamplingMode::None || raw_len <= threshold.get()
}

/// Closed set of reducers selectable by [`SamplingMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reducer {
    Lttb,
    Average,
    Envelope(Extremum),
}

impl Reducer {
    /// `None` for [`SamplingMode::None`], which never reaches a reducer.
    pub fn for_mode(mode: SamplingMode) -> Option<Self> {
        match mode {
            SamplingMode::None => None,
            SamplingMode::Lttb => Some(Self::Lttb),
            SamplingMode::Average => Some(Self::Average),
            SamplingMode::Max => Some(Self::Envelope(Extremum::Max)),
            SamplingMode::Min => Some(Self::Envelope(Extremum::Min)),
        }
    }
}

impl Reduce for Reducer {
    fn reduce<P: Point>(&self, data: &[P], target: usize) -> Vec<P> {
        match *self {
            Self::Lttb => Lttb.reduce(data, target),
            Self::Average => Average.reduce(data, target),
            Self::Envelope(variant) => Envelope(variant).reduce(data, target),
        }
    }
}

/// Sampled series handed to rendering, annotated with what was applied.
#[derive(Clone, Debug, PartialEq)]
pub struct Sampled<'a, P: Point> {
    /// Borrowed raw data on pass-through, an owned reduction otherwise.
    pub points: Cow<'a, [P]>,
    pub mode: SamplingMode,
    pub threshold: SamplingThreshold,
    pub raw_len: usize,
}

impl<P: Point> Sampled<'_, P> {
    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Whether a reducer ran (as opposed to the gate passing raw data through).
    pub fn is_reduced(&self) -> bool { matches!(self.points, Cow::Owned(_)) }

    pub fn as_slice(&self) -> &[P] { &self.points }

    pub fn into_owned(self) -> Vec<P> { self.points.into_owned() }

    /// Effective configuration, for readouts.
    pub fn config(&self) -> SamplingConfig {
        SamplingConfig { mode: self.mode, threshold: self.threshold }
    }
}

/// Sample `series` per `config`.
///
/// Pass-through never fails and borrows the input. When a reduction is
/// required the series must have finite, non-decreasing x; otherwise the
/// first violation is returned and nothing is reduced.
pub fn apply<'a, P: Point>(series: &'a Series<P>, config: &SamplingConfig) -> Result<Sampled<'a, P>, SamplingError> {
    apply_slice(&series.data, config)
}

/// Resolve `overrides` against the library defaults, then [`apply`].
pub fn apply_override<'a, P: Point>(series: &'a Series<P>, overrides: &SamplingOverride) -> Result<Sampled<'a, P>, SamplingError> {
    apply(series, &overrides.resolve(&SamplingConfig::default()))
}

pub fn apply_slice<'a, P: Point>(data: &'a [P], config: &SamplingConfig) -> Result<Sampled<'a, P>, SamplingError> {
    let SamplingConfig { mode, threshold } = *config;
    let raw_len = data.len();

    let reducer = match Reducer::for_mode(mode) {
        Some(r) if !use_raw(raw_len, threshold, mode) => r,
        _ => {
            trace!(raw_len, threshold = threshold.get(), mode = %mode, "sampling pass-through");
            return Ok(Sampled { points: Cow::Borrowed(data), mode, threshold, raw_len });
        }
    };

    if let Err(err) = check_sorted_x(data) {
        warn!(raw_len, mode = %mode, error = %err, "rejecting series for sampling");
        return Err(err);
    }

    let target = threshold.get().min(raw_len);
    debug!(raw_len, target, mode = %mode, "downsampling series");
    let points = reducer.reduce(data, target);
    Ok(Sampled { points: Cow::Owned(points), mode, threshold, raw_len })
}
