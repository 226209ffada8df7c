//! Generated placeholder data.
//!
//! The dashboard never renders an empty chart or table: when the sensor API
//! is down or returns something unrecognizable, these generators stand in.
//! Values are freshly random on every call; only the shape is stable.

use chrono::{Duration, Local};
use rand::Rng;

use super::label;
use super::{DEFAULT_LOG_KIND, LogRow, NormalizedSeries, SampleValue};

/// Hourly points in a generated series.
pub const SERIES_POINTS: usize = 24;

/// Rows in a generated log table.
pub const LOG_ROWS: usize = 12;

/// Generate a 24-hour series ending now, oldest label first.
#[must_use]
pub fn sample_series() -> NormalizedSeries {
    let now = Local::now();
    let mut rng = rand::rng();

    let mut series = NormalizedSeries::default();
    for i in 0..SERIES_POINTS {
        let hours_back = (SERIES_POINTS - 1 - i) as i64;
        series
            .labels
            .push(label::render_local(now - Duration::hours(hours_back)));
        series.values.push(SampleValue::Text(random_value(&mut rng)));
    }
    series
}

/// Generate log rows going backward one hour at a time from now, newest first.
#[must_use]
pub fn sample_logs() -> Vec<LogRow> {
    let now = Local::now();
    let mut rng = rand::rng();

    (0..LOG_ROWS)
        .map(|i| LogRow {
            timestamp: label::render_local(now - Duration::hours(i as i64)),
            value: random_value(&mut rng),
            kind: DEFAULT_LOG_KIND.to_string(),
        })
        .collect()
}

fn random_value(rng: &mut impl Rng) -> String {
    format!("{:.2}", rng.random_range(0.0..100.0))
}
