use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeoError {
    #[error("Commerce lookup failed: {message}")]
    FetchError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: {message}")]
    ConfigError { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, SeoError>;
