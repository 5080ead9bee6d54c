use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("add at least one file, link, or phone number to scan")]
    NoInput,

    #[error("a scan is already in progress")]
    ScanInProgress,

    #[error("feedback must not be empty")]
    EmptyFeedback,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScopeError>;
