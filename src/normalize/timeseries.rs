use serde_json::Value;

use super::{NormalizedSeries, SampleValue, demo, label};

/// Convert a raw time-series payload into a canonical series.
///
/// Accepted shapes:
/// - an array of records carrying a timestamp and a `value` field,
/// - an object with parallel `timestamps` and `values` arrays.
///
/// Absent or unrecognized payloads produce a freshly generated sample
/// series, so this never fails and the chart never goes empty.
#[must_use]
pub fn normalize(payload: Option<&Value>) -> NormalizedSeries {
    let Some(json) = payload else {
        return demo::sample_series();
    };

    match json {
        Value::Null => demo::sample_series(),
        Value::Array(records) => from_records(records),
        Value::Object(map) => {
            if let (Some(Value::Array(timestamps)), Some(Value::Array(values))) =
                (map.get("timestamps"), map.get("values"))
            {
                return from_parallel(timestamps, values);
            }
            tracing::warn!("unrecognized time-series payload shape, using sample data");
            demo::sample_series()
        }
        _ => {
            tracing::warn!("unrecognized time-series payload shape, using sample data");
            demo::sample_series()
        }
    }
}

fn from_records(records: &[Value]) -> NormalizedSeries {
    let mut series = NormalizedSeries::default();
    for record in records {
        series.labels.push(
            label::record_timestamp(record)
                .map(label::render_timestamp)
                .unwrap_or_default(),
        );
        series.values.push(SampleValue::from_json(record.get("value")));
    }
    series
}

fn from_parallel(timestamps: &[Value], values: &[Value]) -> NormalizedSeries {
    if timestamps.len() != values.len() {
        tracing::warn!(
            timestamps = timestamps.len(),
            values = values.len(),
            "parallel time-series arrays differ in length, zipping to the shorter"
        );
    }

    let mut series = NormalizedSeries::default();
    for (ts, value) in timestamps.iter().zip(values) {
        series.labels.push(label::render_timestamp(ts));
        series.values.push(SampleValue::from_json(Some(value)));
    }
    series
}
