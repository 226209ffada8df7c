use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    // Sensor data API
    pub api_base_url: String,
    pub api_request_timeout_seconds: u64,

    // Log tables
    pub log_fetch_limit: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if required environment variables are not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api_base_url: env::var("API_BASE_URL").map_err(|_| ConfigError::Missing("API_BASE_URL"))?,
            api_request_timeout_seconds: env::var("API_REQUEST_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            log_fetch_limit: env::var("LOG_FETCH_LIMIT")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .unwrap_or(50),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
