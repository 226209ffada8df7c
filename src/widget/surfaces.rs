//! Rendering collaborator seams.
//!
//! The widget core owns normalization and lifecycle; everything that
//! actually draws sits behind these traits.

use crate::normalize::{LastReading, LogRow, NormalizedSeries};

/// Chart drawing surface. Rendering yields a handle whose `Drop` tears the
/// chart instance down; the controller keeps at most one alive.
pub trait ChartSurface {
    type Chart;

    fn render(&mut self, series: &NormalizedSeries) -> Self::Chart;
}

/// A table of log rows. Each call replaces the previous contents.
pub trait LogTable {
    fn replace_rows(&mut self, rows: &[LogRow]);
}

/// Per-sensor card previews.
pub trait CardSurface {
    fn show_last_reading(&mut self, sensor_id: &str, reading: &LastReading);
}

/// Video playback / embed surface.
pub trait VideoSurface {
    /// Whether the surface can play HLS manifests.
    fn supports_hls(&self) -> bool;

    fn play(&mut self, url: &str);

    fn play_hls(&mut self, url: &str);

    fn embed_youtube(&mut self, video_id: &str);
}
