use serde_json::Value;

use super::{LastReading, SampleValue, label};

/// Extract the most recent reading from a `last` payload.
///
/// Returns `None` when the payload carries no usable `value`; the caller
/// leaves the sensor card unchanged in that case.
#[must_use]
pub fn normalize(payload: Option<&Value>) -> Option<LastReading> {
    let json = payload?;
    let value = json.get("value")?;
    if value.is_null() {
        return None;
    }

    Some(LastReading {
        value: SampleValue::from_json(Some(value)),
        timestamp: label::record_timestamp(json)
            .map(label::render_timestamp)
            .unwrap_or_default(),
    })
}
