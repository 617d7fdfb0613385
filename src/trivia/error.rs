use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriviaError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

/// Coarse classification of a [`TriviaError`], used by outer layers to pick
/// a status code or exit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Store,
}

impl TriviaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TriviaError::Validation(_) => ErrorKind::Validation,
            TriviaError::NotFound(_) => ErrorKind::NotFound,
            TriviaError::Io(_) | TriviaError::Serialization(_) | TriviaError::Store(_) => {
                ErrorKind::Store
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TriviaError>;
