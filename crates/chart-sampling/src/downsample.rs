// File: crates/chart-sampling/src/downsample.rs
// Summary: Downsampling reducers (LTTB, bucket average, min/max envelope) over any `Point` type.

use crate::point::Point;

/// Maps an x-sorted slice to at most `target` points, never reordering.
///
/// Every reducer returns a copy of `data` when `data.len() <= target`.
pub trait Reduce {
    fn reduce<P: Point>(&self, data: &[P], target: usize) -> Vec<P>;
}

/// Start index of bucket `i` when `len` items are split into `buckets`
/// contiguous index ranges. Integer floor keeps boundaries identical across
/// calls; bucket sizes differ by at most one and the last ends at `len`.
#[inline]
pub(crate) fn bucket_start(i: usize, len: usize, buckets: usize) -> usize {
    // u128 keeps `i * len` from overflowing on 32-bit targets
    ((i as u128 * len as u128) / buckets as u128) as usize
}

/// Index ranges of `buckets` contiguous buckets over `0..len`.
///
/// The remainder of `len / buckets` is spread across the buckets rather than
/// piled onto the last one: 11 items in 3 buckets gives sizes 3/4/4, not 3/3/5.
/// The last bucket still always ends at `len`.
pub(crate) fn bucket_ranges(len: usize, buckets: usize) -> impl Iterator<Item = std::ops::Range<usize>> {
    (0..buckets).map(move |i| bucket_start(i, len, buckets)..bucket_start(i + 1, len, buckets))
}

/// Largest-Triangle-Three-Buckets: keeps first and last, then one real point
/// per interior bucket maximizing the triangle formed with the previously
/// kept point and the mean of the next bucket.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lttb;

impl Reduce for Lttb {
    fn reduce<P: Point>(&self, data: &[P], target: usize) -> Vec<P> {
        lttb(data, target)
    }
}

pub fn lttb<P: Point>(data: &[P], target: usize) -> Vec<P> {
    let n = data.len();
    if target == 0 || n == 0 { return Vec::new(); }
    if target >= n || n <= 2 { return data.to_vec(); }
    if target == 1 { return vec![data[0]]; }

    let mut sampled = Vec::with_capacity(target);
    sampled.push(data[0]);

    // Interior points 1..n-1 are split into `target - 2` buckets.
    let interior = &data[1..n - 1];
    let buckets = target - 2;
    let mut a = data[0];

    for i in 0..buckets {
        let start = bucket_start(i, interior.len(), buckets);
        let end = bucket_start(i + 1, interior.len(), buckets);

        // Far vertex: mean of the next bucket, or the last point after the final bucket.
        let (avg_x, avg_y) = if i + 1 < buckets {
            let next = &interior[end..bucket_start(i + 2, interior.len(), buckets)];
            let c = next.len() as f64;
            let (sx, sy) = next.iter().fold((0.0f64, 0.0f64), |acc, p| (acc.0 + p.x(), acc.1 + p.y()));
            (sx / c, sy / c)
        } else {
            (data[n - 1].x(), data[n - 1].y())
        };

        let (ax, ay) = (a.x(), a.y());
        let mut max_area = -1.0f64;
        let mut max_idx = start;
        for (k, p) in interior.iter().enumerate().take(end).skip(start) {
            // Twice the triangle area; the factor does not change the argmax.
            let area = ((ax - avg_x) * (p.y() - ay) - (ax - p.x()) * (avg_y - ay)).abs();
            if area > max_area {
                max_area = area;
                max_idx = k;
            }
        }

        a = interior[max_idx];
        sampled.push(a);
    }

    sampled.push(data[n - 1]);
    sampled
}

/// One point per bucket whose every channel is the bucket mean.
#[derive(Clone, Copy, Debug, Default)]
pub struct Average;

impl Reduce for Average {
    fn reduce<P: Point>(&self, data: &[P], target: usize) -> Vec<P> {
        average(data, target)
    }
}

pub fn average<P: Point>(data: &[P], target: usize) -> Vec<P> {
    let n = data.len();
    if target == 0 || n == 0 { return Vec::new(); }
    if target >= n { return data.to_vec(); }

    let mut out = Vec::with_capacity(target);
    out.extend(bucket_ranges(n, target).map(|r| P::mean(&data[r])));
    out
}

/// Which extremum the envelope reducer keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extremum {
    Max,
    Min,
}

/// Keeps the point with the greatest (or least) y per bucket.
#[derive(Clone, Copy, Debug)]
pub struct Envelope(pub Extremum);

impl Reduce for Envelope {
    fn reduce<P: Point>(&self, data: &[P], target: usize) -> Vec<P> {
        envelope(data, target, self.0)
    }
}

pub fn envelope<P: Point>(data: &[P], target: usize, variant: Extremum) -> Vec<P> {
    let n = data.len();
    if target == 0 || n == 0 { return Vec::new(); }
    if target >= n { return data.to_vec(); }

    let mut out = Vec::with_capacity(target);
    for r in bucket_ranges(n, target) {
        let bucket = &data[r];
        let mut best = bucket[0];
        for p in &bucket[1..] {
            // Strict comparison: ties keep the first-encountered point.
            let better = match variant {
                Extremum::Max => p.y() > best.y(),
                Extremum::Min => p.y() < best.y(),
            };
            if better { best = *p; }
        }
        out.push(best);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Vec<(f64, f64)> {
        (0..n).map(|i| (i as f64, i as f64)).collect()
    }

    #[test]
    fn buckets_cover_range_evenly() {
        let ranges: Vec<_> = bucket_ranges(10, 3).collect();
        assert_eq!(ranges, vec![0..3, 3..6, 6..10]);
        let sizes: Vec<usize> = bucket_ranges(11, 3).map(|r| r.len()).collect();
        assert_eq!(sizes, vec![3, 4, 4]);
        let sizes: Vec<usize> = bucket_ranges(100_003, 5000).map(|r| r.len()).collect();
        assert!(sizes.iter().all(|&s| s == 20 || s == 21));
        assert_eq!(sizes.iter().sum::<usize>(), 100_003);
    }

    #[test]
    fn lttb_target_ge_len_returns_original() {
        let data = ramp(5);
        assert_eq!(lttb(&data, 5), data);
        assert_eq!(lttb(&data, 10), data);
    }

    #[test]
    fn lttb_degenerate_targets() {
        let data = ramp(5);
        assert!(lttb(&data, 0).is_empty());
        assert_eq!(lttb(&data, 1), vec![(0.0, 0.0)]);
        assert_eq!(lttb(&data, 2), vec![(0.0, 0.0), (4.0, 4.0)]);
        assert!(lttb::<(f64, f64)>(&[], 5).is_empty());
    }

    #[test]
    fn lttb_preserves_first_and_last() {
        let data: Vec<(f64, f64)> = (0..100).map(|i| (i as f64, (i * i) as f64)).collect();
        let result = lttb(&data, 20);
        assert_eq!(result.len(), 20);
        assert_eq!(result.first(), Some(&(0.0, 0.0)));
        assert_eq!(result.last(), Some(&(99.0, 9801.0)));
    }

    #[test]
    fn lttb_picks_spike() {
        // Flat line with a single spike in the only interior bucket.
        let mut data: Vec<(f64, f64)> = (0..11).map(|i| (i as f64, 0.0)).collect();
        data[5].1 = 100.0;
        let result = lttb(&data, 3);
        assert_eq!(result, vec![(0.0, 0.0), (5.0, 100.0), (10.0, 0.0)]);
    }

    #[test]
    fn lttb_known_downsampling() {
        let data = vec![
            (0.0, 0.0),
            (1.0, 10.0),
            (2.0, 2.0),
            (3.0, 8.0),
            (4.0, 4.0),
            (5.0, 6.0),
            (6.0, 1.0),
            (7.0, 9.0),
            (8.0, 3.0),
            (9.0, 7.0),
        ];
        // Interior 1..=8 splits into [1,2] [3,4,5] [6,7,8].
        let result = lttb(&data, 5);
        assert_eq!(result, vec![(0.0, 0.0), (1.0, 10.0), (4.0, 4.0), (6.0, 1.0), (9.0, 7.0)]);
    }

    #[test]
    fn lttb_ties_keep_first_index() {
        // Collinear data: every candidate has zero area, so the bucket start wins.
        let data = ramp(9);
        let result = lttb(&data, 4);
        // Interior 1..=7 splits into [1,2,3] [4,5,6,7]; starts are 1 and 4.
        assert_eq!(result, vec![(0.0, 0.0), (1.0, 1.0), (4.0, 4.0), (8.0, 8.0)]);
    }

    #[test]
    fn lttb_carries_extra_channels() {
        let data: Vec<(f64, f64, f64)> = (0..50).map(|i| (i as f64, (i as f64).sin(), i as f64 * 10.0)).collect();
        for p in lttb(&data, 10) {
            assert_eq!(p.2, p.0 * 10.0);
        }
    }

    #[test]
    fn average_of_pairs() {
        let data = vec![(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)];
        assert_eq!(average(&data, 2), vec![(0.5, 2.0), (2.5, 6.0)]);
    }

    #[test]
    fn average_uneven_buckets() {
        let data = ramp(5);
        // Buckets: [0,1] [2,3,4]
        assert_eq!(average(&data, 2), vec![(0.5, 0.5), (3.0, 3.0)]);
    }

    #[test]
    fn envelope_max_and_min() {
        let data = vec![(0.0, 1.0), (1.0, 5.0), (2.0, -3.0), (3.0, 2.0), (4.0, 2.0), (5.0, -1.0)];
        assert_eq!(envelope(&data, 2, Extremum::Max), vec![(1.0, 5.0), (3.0, 2.0)]);
        assert_eq!(envelope(&data, 2, Extremum::Min), vec![(2.0, -3.0), (5.0, -1.0)]);
    }

    #[test]
    fn envelope_ties_keep_first() {
        let data = vec![(0.0, 4.0), (1.0, 4.0), (2.0, 4.0), (3.0, 4.0)];
        assert_eq!(envelope(&data, 2, Extremum::Max), vec![(0.0, 4.0), (2.0, 4.0)]);
        assert_eq!(envelope(&data, 2, Extremum::Min), vec![(0.0, 4.0), (2.0, 4.0)]);
    }

    #[test]
    fn trait_dispatch_matches_functions() {
        let data: Vec<(f64, f64)> = (0..64).map(|i| (i as f64, (i as f64 * 0.3).cos())).collect();
        assert_eq!(Lttb.reduce(&data, 8), lttb(&data, 8));
        assert_eq!(Average.reduce(&data, 8), average(&data, 8));
        assert_eq!(Envelope(Extremum::Min).reduce(&data, 8), envelope(&data, 8, Extremum::Min));
    }
}
