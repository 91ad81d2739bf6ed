use serde_json::error::Category;
use thiserror::Error;

/// Failure to read the input byte stream to completion.
#[derive(Error, Debug)]
pub enum StreamDecodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Syntax error at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
    #[error("Stream ended inside a value at line {line}, column {column}")]
    Truncated { line: usize, column: usize },
    #[error("Fetch error: {0}")]
    Fetch(String),
    #[error("Decode cancelled")]
    Cancelled,
}

impl StreamDecodeError {
    /// Classify a `serde_json` failure raised while pulling the next value.
    pub fn from_json(err: serde_json::Error) -> Self {
        let (line, column) = (err.line(), err.column());
        match err.classify() {
            Category::Io => Self::Io(std::io::Error::from(err)),
            Category::Eof => Self::Truncated { line, column },
            Category::Syntax | Category::Data => Self::Syntax {
                line,
                column,
                message: err.to_string(),
            },
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[derive(Error, Debug)]
pub enum ComboError {
    #[error("Stream decode error: {0}")]
    StreamDecode(#[from] StreamDecodeError),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ComboError>;
