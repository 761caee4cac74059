use thiserror::Error;

#[derive(Error, Debug)]
pub enum QcError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Degenerate canvas extent: axis length is zero")]
    ZeroExtent,
    #[error("Invalid email or password")]
    AuthMismatch,
    #[error("An account with this email already exists")]
    DuplicateAccount,
    #[error("A detection run is already in progress")]
    DetectionInProgress,
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Report error: {0}")]
    Report(String),
    #[error("Runtime error: {0}")]
    Runtime(String),
}
