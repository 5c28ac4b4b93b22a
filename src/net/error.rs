//! Error type for API calls.

use thiserror::Error;

/// Failure of one API round-trip.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The request never completed (network, CORS, aborted fetch).
    #[error("network error: {0}")]
    Transport(String),
    /// A 2xx response body did not decode into the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}
