use thiserror::Error;

pub type Result<T> = std::result::Result<T, FinanceError>;

/// Error type that captures common finance-core failures.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid date: {0}")]
    Date(#[from] chrono::ParseError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Storage error: {0}")]
    Storage(String),
}
