//! Unit tests for the payload normalizers.
//!
//! Run with: cargo test --test normalize_unit_test

use chrono::NaiveDateTime;
use serde_json::json;

use sensor_dash::normalize::{SampleValue, demo, last, logs, render_timestamp, timeseries};

fn parse_label(label: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(label, "%Y-%m-%d %H:%M:%S").expect("label should parse")
}

#[test]
fn absent_timeseries_payload_generates_24_hourly_points() {
    let series = timeseries::normalize(None);

    assert_eq!(series.len(), 24);
    assert_eq!(series.labels.len(), series.values.len());

    // Labels strictly increasing, exactly one hour apart.
    let times: Vec<NaiveDateTime> = series.labels.iter().map(|l| parse_label(l)).collect();
    for pair in times.windows(2) {
        assert_eq!(pair[1] - pair[0], chrono::Duration::hours(1));
    }

    for value in &series.values {
        let n = value.as_f64().expect("demo values are numeric text");
        assert!((0.0..100.0).contains(&n), "value {n} out of range");
    }
}

#[test]
fn array_payload_preserves_order_and_value_types() {
    let payload = json!([
        {"ts": "2024-01-01T00:00:00Z", "value": 42},
        {"ts": "2024-01-01T01:00:00Z", "value": "7.5"},
        {"ts": "2024-01-01T02:00:00Z"}
    ]);

    let series = timeseries::normalize(Some(&payload));

    assert_eq!(series.len(), 3);
    assert_eq!(series.values[0], SampleValue::Number(42.0));
    assert_eq!(series.values[1], SampleValue::Text("7.5".to_string()));
    assert_eq!(series.values[2], SampleValue::Missing);
    assert_eq!(
        series.labels[0],
        render_timestamp(&json!("2024-01-01T00:00:00Z"))
    );
}

#[test]
fn parallel_arrays_zip_pairwise() {
    let payload = json!({
        "timestamps": ["2024-01-01T00:00:00Z", "2024-01-01T01:00:00Z"],
        "values": [42, 43.5]
    });

    let series = timeseries::normalize(Some(&payload));

    assert_eq!(series.len(), 2);
    assert_eq!(series.values[0], SampleValue::Number(42.0));
    assert_eq!(series.values[1], SampleValue::Number(43.5));
    assert_eq!(
        series.labels[1],
        render_timestamp(&json!("2024-01-01T01:00:00Z"))
    );
}

#[test]
fn single_parallel_pair_keeps_association() {
    let payload = json!({"timestamps": ["2024-01-01T00:00:00Z"], "values": [42]});

    let series = timeseries::normalize(Some(&payload));

    assert_eq!(series.len(), 1);
    assert_eq!(series.values[0], SampleValue::Number(42.0));
    assert_eq!(
        series.labels[0],
        render_timestamp(&json!("2024-01-01T00:00:00Z"))
    );
}

#[test]
fn mismatched_parallel_arrays_zip_to_shorter() {
    let payload = json!({
        "timestamps": ["2024-01-01T00:00:00Z", "2024-01-01T01:00:00Z"],
        "values": [1]
    });

    let series = timeseries::normalize(Some(&payload));

    assert_eq!(series.len(), 1);
}

#[test]
fn unrecognized_payloads_fall_back_to_demo_shape() {
    let payloads = [
        json!(17),
        json!("nope"),
        json!({"foo": "bar"}),
        json!({"timestamps": [1]}),
        json!(null),
    ];

    for payload in payloads {
        let series = timeseries::normalize(Some(&payload));
        assert_eq!(series.len(), 24, "payload {payload} should fall back");
    }
}

#[test]
fn demo_generator_is_fresh_per_call() {
    let a = demo::sample_series();
    let b = demo::sample_series();

    // Two invocations share shape, not values.
    assert_eq!(a.len(), b.len());
    assert_ne!(a.values, b.values);
}

#[test]
fn log_rows_default_type_to_detection() {
    let payload = json!([{"ts": "2024-01-01T00:00:00Z", "value": "1"}]);

    let rows = logs::normalize(Some(&payload));

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind, "detection");
    assert_eq!(rows[0].value, "1");
}

#[test]
fn log_rows_keep_explicit_type() {
    let payload = json!([{"ts": 1_704_067_200, "value": 3.25, "type": "calibration"}]);

    let rows = logs::normalize(Some(&payload));

    assert_eq!(rows[0].kind, "calibration");
    assert_eq!(rows[0].value, "3.25");
}

#[test]
fn absent_log_payload_generates_12_hourly_rows() {
    let rows = logs::normalize(None);

    assert_eq!(rows.len(), 12);

    // Newest first, one hour between rows.
    let times: Vec<NaiveDateTime> = rows.iter().map(|r| parse_label(&r.timestamp)).collect();
    for pair in times.windows(2) {
        assert_eq!(pair[0] - pair[1], chrono::Duration::hours(1));
    }

    for row in &rows {
        assert_eq!(row.kind, "detection");
        let n: f64 = row.value.parse().expect("demo log values are numeric");
        assert!((0.0..100.0).contains(&n));
    }
}

#[test]
fn non_array_log_payloads_fall_back_to_demo() {
    for payload in [json!({"rows": []}), json!("x"), json!(null)] {
        assert_eq!(logs::normalize(Some(&payload)).len(), 12);
    }
}

#[test]
fn empty_log_array_yields_no_rows() {
    assert!(logs::normalize(Some(&json!([]))).is_empty());
}

#[test]
fn log_rows_serialize_with_external_field_names() {
    let rows = logs::normalize(Some(&json!([{"ts": "2024-01-01T00:00:00Z", "value": "1"}])));

    let encoded = serde_json::to_value(&rows[0]).expect("row serializes");
    assert_eq!(encoded["type"], "detection");
}

#[test]
fn last_reading_requires_a_value_field() {
    assert!(last::normalize(None).is_none());
    assert!(last::normalize(Some(&json!(null))).is_none());
    assert!(last::normalize(Some(&json!({"ts": "2024-01-01T00:00:00Z"}))).is_none());
    assert!(last::normalize(Some(&json!([1, 2]))).is_none());

    let reading = last::normalize(Some(&json!({"value": 21.5, "ts": "2024-01-01T00:00:00Z"})))
        .expect("well-formed last payload");
    assert_eq!(reading.value, SampleValue::Number(21.5));
    assert_eq!(
        reading.timestamp,
        render_timestamp(&json!("2024-01-01T00:00:00Z"))
    );
}

#[test]
fn timestamps_render_from_strings_and_epochs() {
    let from_string = render_timestamp(&json!("2024-01-01T12:30:00Z"));

    // Same instant as RFC 3339, epoch seconds, and epoch milliseconds.
    assert_eq!(render_timestamp(&json!(1_704_112_200)), from_string);
    assert_eq!(render_timestamp(&json!(1_704_112_200_000_i64)), from_string);

    // Unparseable strings pass through; null renders empty.
    assert_eq!(render_timestamp(&json!("yesterday")), "yesterday");
    assert_eq!(render_timestamp(&json!(null)), "");
}
