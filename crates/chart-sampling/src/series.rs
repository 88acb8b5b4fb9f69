// File: crates/chart-sampling/src/series.rs
// Summary: Series model for line and scatter data, with x-order validation and lookup helpers.
// Notes:
// - Data is kept in the caller's point type so auxiliary channels survive sampling.
// - x must be non-decreasing before a reducer runs; see `check_sorted_x`.

use std::cmp::Ordering;

use crate::error::SamplingError;
use crate::point::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Scatter, // points with an optional size channel
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series<P = (f64, f64)> {
    pub series_type: SeriesType,
    pub data: Vec<P>,
}

/// Raw data extents, used for axis computation before or after sampling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl<P: Point> Series<P> {
    pub fn new(series_type: SeriesType) -> Self {
        Self { series_type, data: Vec::new() }
    }

    pub fn with_data(series_type: SeriesType, data: Vec<P>) -> Self {
        Self { series_type, data }
    }

    pub fn line(data: Vec<P>) -> Self { Self::with_data(SeriesType::Line, data) }

    pub fn scatter(data: Vec<P>) -> Self { Self::with_data(SeriesType::Scatter, data) }

    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Verify that every x is finite and x is non-decreasing.
    /// Reports the first offending index.
    pub fn check_sorted_x(&self) -> Result<(), SamplingError> {
        check_sorted_x(&self.data)
    }

    /// Stable sort by x. NaN x-values are moved to the end.
    pub fn sort_by_x(&mut self) {
        self.data.sort_by(|a, b| cmp_x(a.x(), b.x()));
    }

    /// x/y extents over finite coordinates. `None` when nothing finite remains.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for p in &self.data {
            let (x, y) = (p.x(), p.y());
            if !x.is_finite() || !y.is_finite() { continue; }
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if !x_min.is_finite() { return None; }
        Some(Bounds { x_min, x_max, y_min, y_max })
    }

    /// Index of the point whose x is closest to `x`; ties go to the lower index.
    /// Assumes sorted x (binary search).
    pub fn nearest_index(&self, x: f64) -> Option<usize> {
        if self.data.is_empty() || x.is_nan() { return None; }
        let i = self.data.partition_point(|p| p.x() < x);
        if i == 0 { return Some(0); }
        if i == self.data.len() { return Some(i - 1); }
        let below = x - self.data[i - 1].x();
        let above = self.data[i].x() - x;
        Some(if below <= above { i - 1 } else { i })
    }
}

pub(crate) fn check_sorted_x<P: Point>(data: &[P]) -> Result<(), SamplingError> {
    let mut prev = f64::NEG_INFINITY;
    for (index, p) in data.iter().enumerate() {
        let next = p.x();
        if !next.is_finite() {
            return Err(SamplingError::NonFiniteX { index });
        }
        if next < prev {
            return Err(SamplingError::UnsortedX { index, prev, next });
        }
        prev = next;
    }
    Ok(())
}

fn cmp_x(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}
