use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibrisError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid book entry: {0}")]
    InvalidBook(String),

    #[error("Malformed book data at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, LibrisError>;
