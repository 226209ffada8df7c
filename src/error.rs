use crate::stream::StreamError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Sensor API error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Stream selection error: {0}")]
    Stream(#[from] StreamError),
}

pub type AppResult<T> = Result<T, AppError>;
