use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Read-only client for the sensor data API.
///
/// The endpoints share one deliberate quirk: their response shapes are not
/// contractually fixed, so responses come back as raw JSON and are handed to
/// the normalizers as-is.
pub struct SensorApiClient {
    http_client: Client,
    base_url: String,
    log_fetch_limit: u32,
}

impl SensorApiClient {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.api_request_timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url: config.api_base_url.clone(),
            log_fetch_limit: config.log_fetch_limit,
        }
    }

    /// Get the time-series payload for a sensor.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Upstream` if the request fails or returns an error status.
    pub async fn fetch_timeseries(&self, sensor_id: &str) -> AppResult<Value> {
        self.get_json(&format!("{}/data", self.base_url), &[("sensor", sensor_id)])
            .await
    }

    /// Get recent log rows for a sensor, bounded by the configured limit.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Upstream` if the request fails or returns an error status.
    pub async fn fetch_logs(&self, sensor_id: &str) -> AppResult<Value> {
        let limit = self.log_fetch_limit.to_string();
        self.get_json(
            &format!("{}/logs", self.base_url),
            &[("sensor", sensor_id), ("limit", limit.as_str())],
        )
        .await
    }

    /// Get the last-value summary for a sensor.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Upstream` if the request fails or returns an error status.
    pub async fn fetch_last_value(&self, sensor_id: &str) -> AppResult<Value> {
        self.get_json(&format!("{}/last", self.base_url), &[("sensor", sensor_id)])
            .await
    }

    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> AppResult<Value> {
        let response = self
            .http_client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!("HTTP {}", response.status())));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to parse response: {e}")))
    }
}
