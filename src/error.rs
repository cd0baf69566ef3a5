//! Error types for the chat client.

use thiserror::Error;

/// Failure of a single request against the chat endpoint.
///
/// This is the only error a caller sees once a client has been built.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// The request could not be sent, or the body could not be decoded.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },
}

impl NetworkError {
    /// HTTP status code, when the endpoint answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            Self::Status { status, .. } => Some(*status),
        }
    }
}

/// Crate error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Request to the chat endpoint failed.
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// Invalid base URL.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Base URL uses a scheme other than `http` or `https`.
    #[error("unsupported base URL scheme: {0}")]
    UnsupportedScheme(String),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    /// Whether this error came from the network round trip.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(NetworkError::Transport(err))
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
