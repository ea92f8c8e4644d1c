use thiserror::Error;

/// Top-level error type for Falah.
#[derive(Debug, Error)]
pub enum FalahError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Error from a data accessor or translation endpoint.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Malformed or inconsistent content data.
    #[error("content error: {0}")]
    Content(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Why a remote fetch produced no usable payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never completed (connection refused, DNS, reset).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body could not be decoded.
    #[error("malformed body: {0}")]
    Decode(String),

    /// The resource does not exist.
    #[error("not found")]
    NotFound,
}
