use thiserror::Error;

use crate::kind::ValueKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("serialization failure: {0}")]
    Serialization(#[from] SerializationError),

    #[error("storage backend error: {0}")]
    Store(String),
}

impl Error {
    /// True for every failure raised while writing or reading an encoded string.
    pub fn is_serialization_failure(&self) -> bool {
        matches!(self, Error::Serialization(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(SerializationError::Json(err))
    }
}

/// Failures of the token codec. Every variant means no output was produced.
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("serde_json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("encode: {0}")]
    Encode(String),

    #[error("decode: {0}")]
    Decode(String),

    #[error("expected {expected} token, found {found}")]
    Shape {
        expected: ValueKind,
        found: &'static str,
    },

    #[error("array element signature mismatch: expected `{expected}`, found `{found}`")]
    Signature { expected: String, found: String },

    #[error("token stream ended early")]
    Truncated,

    #[error("{0} unread token(s) after value")]
    TrailingTokens(usize),

    #[error("input of {size} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
