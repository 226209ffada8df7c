use chrono::{DateTime, Local};
use serde_json::Value;

/// Epoch values at or above this are taken as milliseconds rather than
/// seconds (as seconds they would land past the year 5000).
const EPOCH_MILLIS_THRESHOLD: f64 = 100_000_000_000.0;

const LABEL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a payload timestamp as a display label.
///
/// RFC 3339 strings and numeric epochs (seconds or milliseconds) render in
/// local time, in a format whose lexicographic order matches chronological
/// order. Anything unparseable passes through as-is so a malformed record
/// still produces a row.
#[must_use]
pub fn render_timestamp(value: &Value) -> String {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| render_local(dt.with_timezone(&Local)))
            .unwrap_or_else(|_| s.clone()),
        Value::Number(n) => n
            .as_f64()
            .and_then(render_epoch)
            .unwrap_or_else(|| n.to_string()),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// The timestamp field of a payload record: `ts`, with `timestamp` and
/// `time` accepted as aliases.
pub(crate) fn record_timestamp(record: &Value) -> Option<&Value> {
    record
        .get("ts")
        .or_else(|| record.get("timestamp"))
        .or_else(|| record.get("time"))
}

pub(crate) fn render_local(dt: DateTime<Local>) -> String {
    dt.format(LABEL_FORMAT).to_string()
}

fn render_epoch(epoch: f64) -> Option<String> {
    let utc = if epoch.abs() >= EPOCH_MILLIS_THRESHOLD {
        DateTime::from_timestamp_millis(epoch as i64)
    } else {
        DateTime::from_timestamp(epoch as i64, 0)
    }?;
    Some(render_local(utc.with_timezone(&Local)))
}
