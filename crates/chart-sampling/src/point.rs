// File: crates/chart-sampling/src/point.rs
// Summary: Point trait over plain numeric tuples (x, y, optional auxiliary channels).

/// A multi-channel data point. The first two channels are always `(x, y)`;
/// any further channels (e.g. a scatter marker size) ride along.
///
/// Reducers that select points (LTTB, min/max) copy them whole, so every
/// channel survives. Reducers that blend points go through [`Point::mean`],
/// which must average every channel.
pub trait Point: Copy {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    /// Channel-wise arithmetic mean of `bucket`.
    /// Contract: `bucket` is non-empty; an empty bucket yields NaN channels.
    fn mean(bucket: &[Self]) -> Self;
}

impl Point for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 { self.0 }
    #[inline]
    fn y(&self) -> f64 { self.1 }

    fn mean(bucket: &[Self]) -> Self {
        let n = bucket.len() as f64;
        let (sx, sy) = bucket
            .iter()
            .fold((0.0f64, 0.0f64), |acc, p| (acc.0 + p.0, acc.1 + p.1));
        (sx / n, sy / n)
    }
}

/// Scatter point: `(x, y, size)`.
impl Point for (f64, f64, f64) {
    #[inline]
    fn x(&self) -> f64 { self.0 }
    #[inline]
    fn y(&self) -> f64 { self.1 }

    fn mean(bucket: &[Self]) -> Self {
        let n = bucket.len() as f64;
        let (sx, sy, ss) = bucket
            .iter()
            .fold((0.0f64, 0.0f64, 0.0f64), |acc, p| (acc.0 + p.0, acc.1 + p.1, acc.2 + p.2));
        (sx / n, sy / n, ss / n)
    }
}

impl Point for (f64, f64, f64, f64) {
    #[inline]
    fn x(&self) -> f64 { self.0 }
    #[inline]
    fn y(&self) -> f64 { self.1 }

    fn mean(bucket: &[Self]) -> Self {
        let n = bucket.len() as f64;
        let mut sum = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
        for p in bucket {
            sum.0 += p.0;
            sum.1 += p.1;
            sum.2 += p.2;
            sum.3 += p.3;
        }
        (sum.0 / n, sum.1 / n, sum.2 / n, sum.3 / n)
    }
}
