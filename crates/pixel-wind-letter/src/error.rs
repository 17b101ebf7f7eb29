//! Error types for letter creation and decoding.

use thiserror::Error;

/// A payload could not be built from creator input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LetterError {
    #[error("`{0}` must not be empty")]
    MissingField(&'static str),
    #[error("seed {0} is outside [0, 1)")]
    SeedOutOfRange(f64),
    #[error("`{0}` is not a recognized media reference")]
    InvalidMediaRef(String),
}

/// Why a token failed to decode.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The transport text is not valid base64 or not UTF-8 once decoded.
    #[error("malformed token: {0}")]
    MalformedToken(String),
    /// The text decoded but is not a complete letter record.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

impl From<base64::DecodeError> for DecodeError {
    fn from(err: base64::DecodeError) -> Self {
        DecodeError::MalformedToken(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for DecodeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        DecodeError::MalformedToken(err.to_string())
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::MalformedPayload(err.to_string())
    }
}

impl From<LetterError> for DecodeError {
    fn from(err: LetterError) -> Self {
        DecodeError::MalformedPayload(err.to_string())
    }
}

/// The token does not hold a letter.
///
/// Callers treat this exactly like a link with no token at all; the cause is
/// kept only for logging.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("no valid letter in token")]
pub struct Invalid {
    #[source]
    cause: DecodeError,
}

impl Invalid {
    pub fn cause(&self) -> &DecodeError {
        &self.cause
    }
}

impl From<DecodeError> for Invalid {
    fn from(cause: DecodeError) -> Self {
        Invalid { cause }
    }
}
