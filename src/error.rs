use std::fmt;
use thiserror::Error;

/// The error type for ocisign operations.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The PEM content is not a parseable RSA private key.
    KeyInvalid,

    /// I/O failure while reading key material from disk.
    KeyLoad,

    /// The underlying cryptographic signing operation failed.
    SigningFailed,

    /// The request cannot be signed (missing body, unsupported method, etc.).
    RequestInvalid,

    /// Credential configuration is missing fields or cannot be parsed.
    ConfigInvalid,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error.
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

// Convenience constructors
impl Error {
    /// Create an invalid key error.
    pub fn key_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyInvalid, message)
    }

    /// Create a key load error.
    pub fn key_load(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyLoad, message)
    }

    /// Create a signing failed error.
    pub fn signing_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SigningFailed, message)
    }

    /// Create an invalid request error.
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create an invalid config error.
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::KeyInvalid => write!(f, "invalid private key"),
            ErrorKind::KeyLoad => write!(f, "key load failed"),
            ErrorKind::SigningFailed => write!(f, "signing failed"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_preserved() {
        let err = Error::key_invalid("not a PEM block");
        assert_eq!(err.kind(), ErrorKind::KeyInvalid);
        assert_eq!(err.to_string(), "not a PEM block");
    }

    #[test]
    fn test_error_with_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::key_load("failed to read key file").with_source(io);
        assert_eq!(err.kind(), ErrorKind::KeyLoad);
        assert!(std::error::Error::source(&err).is_some());
    }
}
