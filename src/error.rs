use thiserror::Error;

#[derive(Debug, Error)]
pub enum MinerError {
    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),
    #[error("malformed transaction at index {index}: {reason}")]
    MalformedTransaction { index: usize, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MinerError>;
