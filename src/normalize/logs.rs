use serde_json::Value;

use super::{DEFAULT_LOG_KIND, LogRow, SampleValue, demo, label};

/// Convert a raw log payload into table rows.
///
/// Anything that is not an array of records degrades to generated sample
/// rows. Records without a `type` field are detections.
#[must_use]
pub fn normalize(payload: Option<&Value>) -> Vec<LogRow> {
    let Some(Value::Array(records)) = payload else {
        return demo::sample_logs();
    };

    records.iter().map(row_from_record).collect()
}

fn row_from_record(record: &Value) -> LogRow {
    LogRow {
        timestamp: label::record_timestamp(record)
            .map(label::render_timestamp)
            .unwrap_or_default(),
        value: SampleValue::from_json(record.get("value")).to_string(),
        kind: record
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_LOG_KIND)
            .to_string(),
    }
}
