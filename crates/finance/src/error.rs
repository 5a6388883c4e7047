//! Finance client error types.

use thiserror::Error;

/// Errors produced while talking to the remote inference service.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The remote target is misconfigured (bad URL, empty run id).
    #[error("config error: {0}")]
    Config(String),

    /// The call failed at the transport level: non-2xx status or network failure.
    #[error("Finance API error: {0}")]
    Api(String),

    /// No response arrived before the configured deadline.
    #[error("Finance API error: request timed out after {0}ms")]
    Timeout(u64),

    /// A 2xx response whose body does not have the expected envelope shape.
    #[error("Finance API returned a malformed response: {0}")]
    MalformedResponse(String),
}

impl Error {
    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Api(_) => "api",
            Self::Timeout(_) => "timeout",
            Self::MalformedResponse(_) => "malformed_response",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
