use thiserror::Error;

/// Failure reported by the HTTP transport, carrying its message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct NetworkError(pub String);

impl NetworkError {
    pub fn new(message: impl Into<String>) -> NetworkError {
        NetworkError(message.into())
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(e: reqwest::Error) -> Self {
        NetworkError(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not resolve parameter '{name}' for item {item_index}: {reason}")]
    Parameter {
        name: &'static str,
        item_index: usize,
        reason: String,
    },
    #[error("Minimum number cannot be greater than maximum number")]
    InvalidRange { item_index: usize, min: i64, max: i64 },
    #[error("{source}")]
    Network {
        item_index: usize,
        source: NetworkError,
    },
    #[error("Error processing response from Random.org API")]
    InvalidResponse { item_index: usize, body: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn item_index(&self) -> Option<usize> {
        match self {
            Error::Parameter { item_index, .. }
            | Error::InvalidRange { item_index, .. }
            | Error::Network { item_index, .. }
            | Error::InvalidResponse { item_index, .. } => Some(*item_index),
            Error::Other(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
