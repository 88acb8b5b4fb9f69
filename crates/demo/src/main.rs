// File: crates/demo/src/main.rs
// Summary: Demo synthesizes line/scatter datasets, samples them per CLI/JSON options, and prints a readout.

mod data;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_sampling::{ChartOptions, Point, Sampled, SamplingMode, SamplingOverride, Series};
use clap::Parser;
use tracing::info;

use crate::data::{line_series, scatter_series, Xorshift64};

#[derive(Parser, Debug)]
#[command(name = "sampling-demo", about = "Downsample synthetic line and scatter data and report rendered point counts")]
struct Opts {
    /// Sampling mode: none | lttb | average | max | min (unknown names fall back to lttb)
    #[arg(long, default_value = "lttb")]
    mode: String,

    /// Raw length at or below which no reduction occurs (clamped to >= 2)
    #[arg(long, default_value_t = 5000.0)]
    threshold: f64,

    /// Number of points in the line dataset
    #[arg(long, default_value_t = 100_000)]
    line_points: usize,

    /// Number of points in the scatter dataset
    #[arg(long, default_value_t = 60_000)]
    scatter_points: usize,

    /// JSON chart options file; replaces --mode/--threshold when given
    #[arg(long)]
    options: Option<PathBuf>,

    /// Directory to write sampled series as CSV
    #[arg(long)]
    csv_out: Option<PathBuf>,

    /// Seed for the synthetic data
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Log reducer decisions
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    tracing_subscriber::fmt()
        .with_max_level(if opts.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO })
        .init();

    let chart_opts = match &opts.options {
        Some(path) => load_options(path)?,
        None => ChartOptions::new(SamplingOverride {
            mode: Some(SamplingMode::parse_lenient(&opts.mode)),
            threshold: Some(opts.threshold),
        }),
    };

    let mut rng = Xorshift64::new(opts.seed);
    let line = line_series(opts.line_points, &mut rng);
    let scatter = scatter_series(opts.scatter_points, &mut rng);
    info!(line = line.len(), scatter = scatter.len(), "generated datasets");

    if let Some(b) = line.bounds() {
        println!("Line bounds: x [{:.1}, {:.1}], y [{:.3}, {:.3}]", b.x_min, b.x_max, b.y_min, b.y_max);
    }

    let line_out = chart_opts.sample_series(0, &line).context("sampling line series")?;
    let scatter_out = chart_opts.sample_series(1, &scatter).context("sampling scatter series")?;

    print_readout("line", &line_out);
    print_readout("scatter", &scatter_out);

    if let Some(dir) = &opts.csv_out {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        let p = dir.join("line_sampled.csv");
        write_csv(&p, &["x", "y"], line_out.as_slice().iter().map(|&(x, y)| vec![x, y]))?;
        println!("Wrote {}", p.display());
        let p = dir.join("scatter_sampled.csv");
        write_csv(&p, &["x", "y", "size"], scatter_out.as_slice().iter().map(|&(x, y, s)| vec![x, y, s]))?;
        println!("Wrote {}", p.display());
    }

    // Hover lookup against the rendered scatter, as an interaction layer would do.
    let rendered = Series::scatter(scatter_out.into_owned());
    if let Some(i) = rendered.nearest_index(500.0) {
        let p = rendered.data[i];
        println!("Nearest rendered scatter point to x=500: ({:.3}, {:.3}) size {:.2}", p.x(), p.y(), p.2);
    }

    Ok(())
}

fn load_options(path: &Path) -> Result<ChartOptions> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let opts = ChartOptions::from_json(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(opts)
}

fn print_readout<P: Point>(label: &str, s: &Sampled<'_, P>) {
    println!(
        "{label:>8}: rendered {} of {} points (mode={}, threshold={}{})",
        s.len(),
        s.raw_len,
        s.mode,
        s.threshold,
        if s.is_reduced() { "" } else { ", raw" },
    );
}

fn write_csv(path: &Path, headers: &[&str], rows: impl Iterator<Item = Vec<f64>>) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row.iter().map(|v| v.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}
