// File: crates/demo/src/data.rs
// Summary: Synthetic line and scatter datasets for the sampling demo.

use chart_sampling::Series;

/// xorshift64 PRNG; reproducible noise without pulling in an RNG crate.
#[derive(Clone, Debug)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    pub fn new(seed: u64) -> Self {
        Self { state: if seed == 0 { 0x853c49e6748fea9b } else { seed } }
    }

    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Noisy sine with a slow drift and occasional spikes; x is the sample index.
pub fn line_series(n: usize, rng: &mut Xorshift64) -> Series {
    let mut data = Vec::with_capacity(n);
    for i in 0..n {
        let x = i as f64;
        let mut y = (x * 0.002).sin() * 40.0 + (x * 0.0003) + (rng.next_f64() - 0.5) * 6.0;
        if rng.next_f64() < 0.0005 {
            y += 60.0;
        }
        data.push((x, y));
    }
    Series::line(data)
}

/// Clustered scatter points with a per-point marker size. Sorted by x before returning.
pub fn scatter_series(n: usize, rng: &mut Xorshift64) -> Series<(f64, f64, f64)> {
    let mut data = Vec::with_capacity(n);
    for i in 0..n {
        let cluster = (i % 4) as f64;
        let x = rng.next_f64() * 1_000.0;
        let y = cluster * 25.0 + (rng.next_f64() - 0.5) * 20.0 + (x * 0.01).cos() * 5.0;
        let size = 2.0 + rng.next_f64() * 8.0;
        data.push((x, y, size));
    }
    let mut series = Series::scatter(data);
    series.sort_by_x();
    series
}
