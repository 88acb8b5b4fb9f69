// File: crates/chart-sampling/src/config.rs
// Summary: Sampling mode/threshold types, lenient normalization, and per-series override merge.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Threshold used when none is configured (or the configured one is not finite).
pub const DEFAULT_THRESHOLD: usize = 5000;
/// Smallest usable threshold: first and last points are always kept.
pub const MIN_THRESHOLD: usize = 2;

/// Downsampling strategy. Unknown names (and non-string option values)
/// normalize to [`SamplingMode::Lttb`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "Value")]
pub enum SamplingMode {
    None,
    #[default]
    Lttb,
    Average,
    Max,
    Min,
}

impl SamplingMode {
    pub const ALL: [SamplingMode; 5] = [
        SamplingMode::None,
        SamplingMode::Lttb,
        SamplingMode::Average,
        SamplingMode::Max,
        SamplingMode::Min,
    ];

    /// Parse a mode name, case-insensitively. Anything unrecognized maps to `Lttb`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Self::None,
            "lttb" => Self::Lttb,
            "average" => Self::Average,
            "max" => Self::Max,
            "min" => Self::Min,
            _ => Self::Lttb,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Lttb => "lttb",
            Self::Average => "average",
            Self::Max => "max",
            Self::Min => "min",
        }
    }
}

impl From<String> for SamplingMode {
    fn from(s: String) -> Self { Self::parse_lenient(&s) }
}

impl From<Value> for SamplingMode {
    fn from(v: Value) -> Self {
        match v {
            Value::String(s) => Self::parse_lenient(&s),
            _ => Self::Lttb,
        }
    }
}

impl From<&str> for SamplingMode {
    fn from(s: &str) -> Self { Self::parse_lenient(s) }
}

impl fmt::Display for SamplingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl Serialize for SamplingMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Raw length at or below which no reduction occurs. Always `>= 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SamplingThreshold(usize);

impl SamplingThreshold {
    /// Clamp to the minimum of 2.
    pub const fn new(n: usize) -> Self {
        if n < MIN_THRESHOLD { Self(MIN_THRESHOLD) } else { Self(n) }
    }

    /// Normalize a loosely-typed option value: non-finite -> default,
    /// fractional -> truncated, below 2 (including negative) -> 2.
    pub fn from_f64(v: f64) -> Self {
        if !v.is_finite() {
            return Self::default();
        }
        if v < MIN_THRESHOLD as f64 {
            return Self(MIN_THRESHOLD);
        }
        // `as` saturates for values beyond usize::MAX
        Self::new(v.trunc() as usize)
    }

    pub const fn get(self) -> usize { self.0 }
}

impl Default for SamplingThreshold {
    fn default() -> Self { Self(DEFAULT_THRESHOLD) }
}

impl From<usize> for SamplingThreshold {
    fn from(n: usize) -> Self { Self::new(n) }
}

impl fmt::Display for SamplingThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Fully resolved per-series sampling configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SamplingConfig {
    pub mode: SamplingMode,
    pub threshold: SamplingThreshold,
}

impl SamplingConfig {
    pub const fn new(mode: SamplingMode, threshold: usize) -> Self {
        Self { mode, threshold: SamplingThreshold::new(threshold) }
    }

    /// Build from raw option values; absent fields take the library defaults.
    pub fn from_raw(mode: Option<&str>, threshold: Option<f64>) -> Self {
        SamplingOverride {
            mode: mode.map(SamplingMode::parse_lenient),
            threshold,
        }
        .resolve(&Self::default())
    }
}

/// Partial configuration: each field independently overrides the defaults it
/// is resolved against. Field names follow the chart options surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SamplingOverride {
    #[serde(rename = "sampling", default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<SamplingMode>,
    #[serde(
        rename = "samplingThreshold",
        default,
        deserialize_with = "lenient_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub threshold: Option<f64>,
}

/// Accept any JSON value for `samplingThreshold`. Numbers pass through,
/// numeric strings ("1000", "Infinity", "NaN") are parsed, anything else
/// becomes NaN and so resolves to the default. `null` means unset.
fn lenient_threshold<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let v = Option::<Value>::deserialize(deserializer)?;
    Ok(v.map(|v| match v {
        Value::Null => f64::NAN,
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }))
}

impl SamplingOverride {
    pub const fn mode(mode: SamplingMode) -> Self {
        Self { mode: Some(mode), threshold: None }
    }

    pub const fn threshold(threshold: f64) -> Self {
        Self { mode: None, threshold: Some(threshold) }
    }

    pub fn is_empty(&self) -> bool {
        self.mode.is_none() && self.threshold.is_none()
    }

    /// Field-by-field merge over `defaults`.
    pub fn resolve(&self, defaults: &SamplingConfig) -> SamplingConfig {
        SamplingConfig {
            mode: self.mode.unwrap_or(defaults.mode),
            threshold: self
                .threshold
                .map(SamplingThreshold::from_f64)
                .unwrap_or(defaults.threshold),
        }
    }
}
