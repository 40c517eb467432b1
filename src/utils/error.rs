use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrigonError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed triangle document at '{field}': {reason}")]
    MalformedDocument { field: String, reason: String },

    #[error("Coordinate '{field}' is not a finite number")]
    NonFiniteCoordinate { field: String },

    #[error("Degenerate triangle: area {area} is not positive")]
    DegenerateTriangle { area: f64 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, TrigonError>;
