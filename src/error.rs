use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Output path could not be created or written: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize scenario document: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unknown weather condition: {0}")]
    UnknownWeatherCondition(String),

    #[error("Unknown time context: {0}")]
    UnknownTimeContext(String),

    #[error("Unknown placement strategy: {0}")]
    UnknownPlacementStrategy(String),
}

pub type Result<T> = std::result::Result<T, Error>;
