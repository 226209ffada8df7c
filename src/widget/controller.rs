use std::sync::Arc;

use crate::normalize::{LogRow, NormalizedSeries, last, logs, timeseries};
use crate::stream::{self, StreamError, StreamSource};
use crate::upstream::SensorApiClient;

use super::chart::ChartSlot;
use super::surfaces::{CardSurface, ChartSurface, LogTable, VideoSurface};

/// Generation tag for an in-flight sensor load.
///
/// Closing the view or starting a newer load makes older tags stale;
/// [`DashboardController::apply`] discards stale results instead of
/// rendering into a view the user has already left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTag(u64);

/// Normalized data for one sensor view: the modal chart plus its log table.
#[derive(Debug, Clone)]
pub struct SensorView {
    pub sensor_id: String,
    pub series: NormalizedSeries,
    pub logs: Vec<LogRow>,
}

/// Fetch and normalize everything the sensor view renders.
///
/// Transport failures, error statuses, and unrecognized payloads all
/// collapse into generated demo data; this cannot fail.
pub async fn fetch_sensor_view(client: &SensorApiClient, sensor_id: &str) -> SensorView {
    let series = match client.fetch_timeseries(sensor_id).await {
        Ok(payload) => timeseries::normalize(Some(&payload)),
        Err(e) => {
            tracing::warn!(
                sensor = sensor_id,
                error = %e,
                "time-series fetch failed, using sample data"
            );
            timeseries::normalize(None)
        }
    };

    let log_rows = match client.fetch_logs(sensor_id).await {
        Ok(payload) => logs::normalize(Some(&payload)),
        Err(e) => {
            tracing::warn!(
                sensor = sensor_id,
                error = %e,
                "log fetch failed, using sample data"
            );
            logs::normalize(None)
        }
    };

    SensorView {
        sensor_id: sensor_id.to_string(),
        series,
        logs: log_rows,
    }
}

/// Orchestrates the dashboard widget: fetches through the sensor API client,
/// normalizes, and drives the rendering surfaces.
pub struct DashboardController<C: ChartSurface> {
    client: Arc<SensorApiClient>,
    chart_surface: C,
    chart: ChartSlot<C::Chart>,
    modal_table: Box<dyn LogTable>,
    datalog_table: Box<dyn LogTable>,
    cards: Box<dyn CardSurface>,
    video: Box<dyn VideoSurface>,
    generation: u64,
}

impl<C: ChartSurface> DashboardController<C> {
    pub fn new(
        client: Arc<SensorApiClient>,
        chart_surface: C,
        modal_table: Box<dyn LogTable>,
        datalog_table: Box<dyn LogTable>,
        cards: Box<dyn CardSurface>,
        video: Box<dyn VideoSurface>,
    ) -> Self {
        Self {
            client,
            chart_surface,
            chart: ChartSlot::new(),
            modal_table,
            datalog_table,
            cards,
            video,
            generation: 0,
        }
    }

    /// The shared API client, for hosts that run loads on their own tasks.
    #[must_use]
    pub fn client(&self) -> Arc<SensorApiClient> {
        Arc::clone(&self.client)
    }

    /// Start a new sensor load, invalidating any outstanding one.
    pub fn begin(&mut self) -> RequestTag {
        self.generation += 1;
        RequestTag(self.generation)
    }

    /// Render a completed load, unless a newer load or a close superseded it.
    pub fn apply(&mut self, tag: RequestTag, view: &SensorView) {
        if tag.0 != self.generation {
            tracing::debug!(sensor = %view.sensor_id, "discarding stale sensor view");
            return;
        }

        let chart = self.chart_surface.render(&view.series);
        self.chart.replace(chart);
        self.modal_table.replace_rows(&view.logs);
        self.datalog_table.replace_rows(&view.logs);
    }

    /// Convenience flow for hosts that keep the controller on the UI task:
    /// begin, fetch, apply in one call.
    pub async fn show_sensor(&mut self, sensor_id: &str) {
        let tag = self.begin();
        let view = fetch_sensor_view(&self.client, sensor_id).await;
        self.apply(tag, &view);
    }

    /// Close the sensor view: outstanding loads become stale and the chart
    /// is torn down. Safe to call repeatedly.
    pub fn close(&mut self) {
        self.generation += 1;
        self.chart.release();
    }

    #[must_use]
    pub fn chart_is_live(&self) -> bool {
        self.chart.is_live()
    }

    /// Point the video surface at a user-supplied stream URL.
    ///
    /// # Errors
    ///
    /// Returns the user-visible validation failures: empty input, or an HLS
    /// manifest when the surface cannot play HLS. The surface is untouched
    /// on error.
    pub fn set_stream(&mut self, url: &str) -> Result<(), StreamError> {
        match StreamSource::classify(url)? {
            StreamSource::Direct(url) => self.video.play(&url),
            StreamSource::Hls(url) => {
                if !self.video.supports_hls() {
                    return Err(StreamError::HlsUnsupported);
                }
                self.video.play_hls(&url);
            }
        }
        Ok(())
    }

    /// Embed a YouTube stream by URL or bare video id.
    ///
    /// # Errors
    ///
    /// Returns `StreamError::InvalidYouTubeId` when no 11-character id can
    /// be found; the surface is untouched on error.
    pub fn embed_youtube(&mut self, input: &str) -> Result<(), StreamError> {
        let id = stream::extract_youtube_id(input)?;
        self.video.embed_youtube(&id);
        Ok(())
    }

    /// Refresh the last-value previews on the sensor cards.
    ///
    /// Fetches run concurrently; individual failures and unrecognized
    /// payloads leave that card unchanged.
    pub async fn refresh_cards(&mut self, sensor_ids: &[&str]) {
        let client = Arc::clone(&self.client);
        let fetches = sensor_ids.iter().map(|id| client.fetch_last_value(id));
        let results = futures::future::join_all(fetches).await;

        for (sensor_id, result) in sensor_ids.iter().copied().zip(results) {
            match result {
                Ok(payload) => {
                    if let Some(reading) = last::normalize(Some(&payload)) {
                        self.cards.show_last_reading(sensor_id, &reading);
                    }
                }
                Err(e) => {
                    tracing::debug!(sensor = sensor_id, error = %e, "last-value fetch skipped");
                }
            }
        }
    }
}
