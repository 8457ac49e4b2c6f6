use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, SnipError>;
