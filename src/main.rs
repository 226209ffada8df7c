use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sensor_dash::config::Config;
use sensor_dash::error::AppError;
use sensor_dash::normalize::{LastReading, LogRow, NormalizedSeries};
use sensor_dash::upstream::SensorApiClient;
use sensor_dash::widget::{
    CardSurface, ChartSurface, DashboardController, LogTable, VideoSurface,
};

/// Console rendering of the dashboard surfaces, for pointing the widget core
/// at a live backend (or at nothing, which exercises the demo fallback).
struct ConsoleChart;

struct ConsoleChartHandle {
    points: usize,
}

impl Drop for ConsoleChartHandle {
    fn drop(&mut self) {
        tracing::debug!(points = self.points, "chart torn down");
    }
}

impl ChartSurface for ConsoleChart {
    type Chart = ConsoleChartHandle;

    fn render(&mut self, series: &NormalizedSeries) -> ConsoleChartHandle {
        println!("  chart ({} points):", series.len());
        for (label, value) in series.points() {
            println!("    {label}  {value}");
        }
        ConsoleChartHandle {
            points: series.len(),
        }
    }
}

struct ConsoleTable {
    name: &'static str,
}

impl LogTable for ConsoleTable {
    fn replace_rows(&mut self, rows: &[LogRow]) {
        println!("  {} ({} rows):", self.name, rows.len());
        for row in rows {
            println!("    {}  {}  {}", row.timestamp, row.value, row.kind);
        }
    }
}

struct ConsoleCards;

impl CardSurface for ConsoleCards {
    fn show_last_reading(&mut self, sensor_id: &str, reading: &LastReading) {
        println!("  card {sensor_id}: Last: {} @ {}", reading.value, reading.timestamp);
    }
}

struct ConsoleVideo;

impl VideoSurface for ConsoleVideo {
    fn supports_hls(&self) -> bool {
        false
    }

    fn play(&mut self, url: &str) {
        println!("  video: playing {url}");
    }

    fn play_hls(&mut self, url: &str) {
        println!("  video: playing HLS {url}");
    }

    fn embed_youtube(&mut self, video_id: &str) {
        println!("  video: embedding https://www.youtube.com/embed/{video_id}");
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sensor_dash=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration (fail-fast)
    let config = Config::from_env()?;
    tracing::info!(base_url = %config.api_base_url, "Configuration loaded");

    let client = Arc::new(SensorApiClient::new(&config));

    let mut sensors: Vec<String> = std::env::args().skip(1).collect();
    if sensors.is_empty() {
        sensors.push("sensor-1".to_string());
    }

    let mut controller = DashboardController::new(
        client,
        ConsoleChart,
        Box::new(ConsoleTable { name: "modal log" }),
        Box::new(ConsoleTable { name: "datalog" }),
        Box::new(ConsoleCards),
        Box::new(ConsoleVideo),
    );

    for sensor in &sensors {
        println!("{sensor}:");
        controller.show_sensor(sensor).await;
    }

    let ids: Vec<&str> = sensors.iter().map(String::as_str).collect();
    controller.refresh_cards(&ids).await;

    // Optional stream preview, mirroring the widget's two stream inputs.
    if let Ok(url) = std::env::var("STREAM_URL") {
        if let Err(e) = controller.set_stream(&url) {
            eprintln!("alert: {e}");
        }
    }
    if let Ok(input) = std::env::var("YOUTUBE_URL") {
        if let Err(e) = controller.embed_youtube(&input) {
            eprintln!("alert: {e}");
        }
    }

    controller.close();
    Ok(())
}
