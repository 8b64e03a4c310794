use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrianglePathError {
    #[error("Precondition violated: {0}")]
    Precondition(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Worker error: {0}")]
    Worker(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrianglePathError>;

/// Shorthand for returning a precondition failure.
pub(crate) fn precondition<T>(message: impl Into<String>) -> Result<T> {
    Err(TrianglePathError::Precondition(message.into()))
}
