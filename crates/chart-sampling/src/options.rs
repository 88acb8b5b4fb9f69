// File: crates/chart-sampling/src/options.rs
// Summary: Chart options boundary; merges chart-wide and per-series sampling settings and samples each series.

use serde::{Deserialize, Serialize};

use crate::config::{SamplingConfig, SamplingOverride};
use crate::error::SamplingError;
use crate::point::Point;
use crate::sampler::{apply, Sampled};
use crate::series::Series;

/// The sampling-relevant slice of a chart's options document.
///
/// Precedence: library defaults < top-level `sampling`/`samplingThreshold`
/// < `series[i]` entry. Other option keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(flatten)]
    pub defaults: SamplingOverride,
    #[serde(default)]
    pub series: Vec<SamplingOverride>,
}

impl ChartOptions {
    pub fn new(defaults: SamplingOverride) -> Self {
        Self { defaults, series: Vec::new() }
    }

    pub fn from_json(s: &str) -> Result<Self, SamplingError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_series(mut self, overrides: SamplingOverride) -> Self {
        self.series.push(overrides);
        self
    }

    /// Chart-wide configuration (top-level fields over library defaults).
    pub fn chart_config(&self) -> SamplingConfig {
        self.defaults.resolve(&SamplingConfig::default())
    }

    /// Configuration for the series at `index`; missing entries inherit the chart-wide config.
    pub fn series_config(&self, index: usize) -> SamplingConfig {
        let chart = self.chart_config();
        match self.series.get(index) {
            Some(o) => o.resolve(&chart),
            None => chart,
        }
    }

    /// Resolve the config for `series[index]` and run the dispatcher.
    pub fn sample_series<'a, P: Point>(&self, index: usize, series: &'a Series<P>) -> Result<Sampled<'a, P>, SamplingError> {
        apply(series, &self.series_config(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SamplingMode;

    #[test]
    fn parses_top_level_and_series_entries() {
        let opts = ChartOptions::from_json(
            r#"{
                "sampling": "max",
                "samplingThreshold": 800,
                "grid": { "left": 40 },
                "series": [ { "sampling": "average" }, { "samplingThreshold": 100 }, {} ]
            }"#,
        )
        .unwrap();

        assert_eq!(opts.chart_config(), SamplingConfig::new(SamplingMode::Max, 800));
        assert_eq!(opts.series_config(0), SamplingConfig::new(SamplingMode::Average, 800));
        assert_eq!(opts.series_config(1), SamplingConfig::new(SamplingMode::Max, 100));
        assert_eq!(opts.series_config(2), SamplingConfig::new(SamplingMode::Max, 800));
        assert_eq!(opts.series_config(9), SamplingConfig::new(SamplingMode::Max, 800));
    }

    #[test]
    fn empty_document_uses_library_defaults() {
        let opts = ChartOptions::from_json("{}").unwrap();
        assert_eq!(opts.series_config(0), SamplingConfig::default());
    }

    #[test]
    fn bad_values_normalize() {
        let opts = ChartOptions::from_json(r#"{"sampling":"bogus","samplingThreshold":-3}"#).unwrap();
        assert_eq!(opts.chart_config(), SamplingConfig::new(SamplingMode::Lttb, 2));
    }

    #[test]
    fn loosely_typed_values_normalize() {
        let opts = ChartOptions::from_json(r#"{"samplingThreshold":"Infinity"}"#).unwrap();
        assert_eq!(opts.chart_config(), SamplingConfig::default());

        let opts = ChartOptions::from_json(r#"{"samplingThreshold":300,"series":[{"samplingThreshold":"abc"}]}"#).unwrap();
        assert_eq!(opts.series_config(0), SamplingConfig::new(SamplingMode::Lttb, 5000));

        let opts = ChartOptions::from_json(r#"{"sampling":7}"#).unwrap();
        assert_eq!(opts.chart_config(), SamplingConfig::new(SamplingMode::Lttb, 5000));

        let opts = ChartOptions::from_json(r#"{"sampling":"max","series":[{"sampling":false}]}"#).unwrap();
        assert_eq!(opts.series_config(0).mode, SamplingMode::Lttb);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(ChartOptions::from_json("{ sampling: "), Err(SamplingError::Options(_))));
    }

    #[test]
    fn builder_matches_parsed() {
        let built = ChartOptions::new(SamplingOverride::mode(SamplingMode::Min))
            .with_series(SamplingOverride::threshold(10.0));
        let parsed = ChartOptions::from_json(r#"{"sampling":"min","series":[{"samplingThreshold":10}]}"#).unwrap();
        assert_eq!(built, parsed);
    }
}
