//! Payload normalization.
//!
//! The sensor API does not fix its response shapes contractually; these
//! modules absorb the variants the dashboard has been observed to receive
//! and produce one canonical form per rendering surface. Every entry point
//! is total: unrecognized input degrades to freshly generated demo data,
//! never to an error.

mod label;

pub mod demo;
pub mod last;
pub mod logs;
pub mod timeseries;

pub use label::render_timestamp;

use serde::Serialize;

/// Log rows without an explicit type are treated as detections.
pub const DEFAULT_LOG_KIND: &str = "detection";

/// A chart value carried through from the payload, type-preserving.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SampleValue {
    Number(f64),
    Text(String),
    /// The record had no usable value field. Serializes as null.
    Missing,
}

impl SampleValue {
    pub(crate) fn from_json(value: Option<&serde_json::Value>) -> Self {
        match value {
            Some(serde_json::Value::Number(n)) => n.as_f64().map_or(Self::Missing, Self::Number),
            Some(serde_json::Value::String(s)) => Self::Text(s.clone()),
            _ => Self::Missing,
        }
    }

    /// Numeric view, parsing textual values when possible.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Missing => None,
        }
    }
}

impl std::fmt::Display for SampleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Missing => Ok(()),
        }
    }
}

/// Canonical time-series: display labels and values as parallel arrays.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NormalizedSeries {
    pub labels: Vec<String>,
    pub values: Vec<SampleValue>,
}

impl NormalizedSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate label/value pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (&str, &SampleValue)> + '_ {
        self.labels.iter().map(String::as_str).zip(self.values.iter())
    }
}

/// One row of the log tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRow {
    pub timestamp: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Most recent reading shown on a sensor card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LastReading {
    pub value: SampleValue,
    pub timestamp: String,
}
