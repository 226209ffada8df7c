//! Unit tests for live-stream source classification.
//!
//! Run with: cargo test --test stream_unit_test

use sensor_dash::stream::{StreamError, StreamSource, extract_youtube_id};

#[test]
fn empty_and_whitespace_urls_are_rejected() {
    assert_eq!(StreamSource::classify(""), Err(StreamError::EmptyUrl));
    assert_eq!(StreamSource::classify("   "), Err(StreamError::EmptyUrl));
}

#[test]
fn m3u8_urls_classify_as_hls() {
    assert_eq!(
        StreamSource::classify("https://cdn.example.com/live/stream.m3u8"),
        Ok(StreamSource::Hls(
            "https://cdn.example.com/live/stream.m3u8".to_string()
        ))
    );
}

#[test]
fn other_urls_classify_as_direct() {
    assert_eq!(
        StreamSource::classify(" https://cdn.example.com/live/stream.mp4 "),
        Ok(StreamSource::Direct(
            "https://cdn.example.com/live/stream.mp4".to_string()
        ))
    );
}

#[test]
fn youtube_ids_extract_from_watch_and_share_urls() {
    assert_eq!(
        extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
        Ok("dQw4w9WgXcQ".to_string())
    );
    assert_eq!(
        extract_youtube_id("https://youtu.be/dQw4w9WgXcQ"),
        Ok("dQw4w9WgXcQ".to_string())
    );
    assert_eq!(
        extract_youtube_id("dQw4w9WgXcQ"),
        Ok("dQw4w9WgXcQ".to_string())
    );
}

#[test]
fn malformed_youtube_input_is_rejected() {
    assert!(extract_youtube_id("").is_err());
    assert!(extract_youtube_id("tooshort").is_err());
    assert!(extract_youtube_id("twelve-chars!").is_err());
    // Non-YouTube URLs are treated as bare ids and fail the length check.
    assert!(extract_youtube_id("https://example.com/watch?v=dQw4w9WgXcQ").is_err());
}
