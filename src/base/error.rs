//! Error taxonomy for the client surface.
//!
//! Failures are classified so callers can branch reliably:
//! - [`RequestError`]: construction and network failures (unknown profile,
//!   invalid URL/header, timeout, transport failure).
//! - [`Error::Abort`]: user-initiated cancellation, pre-dispatch or mid-flight.
//! - [`BodyError`]: local body-state misuse (reuse, clone-after-consume),
//!   always synchronous, never conflated with network failures.

use std::time::Duration;
use thiserror::Error;

/// Top-level failure returned by [`fetch`](crate::fetch) and
/// [`Client`](crate::Client).
#[derive(Debug, Error)]
pub enum Error {
    /// Request construction or network failure.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The caller cancelled the request through an
    /// [`AbortSignal`](crate::AbortSignal).
    #[error("request aborted")]
    Abort,

    /// Local body-state misuse.
    #[error(transparent)]
    Body(#[from] BodyError),
}

impl Error {
    /// True if this failure was a user-initiated abort.
    pub fn is_abort(&self) -> bool {
        matches!(self, Error::Abort)
    }

    /// True if this failure was a timeout expiry.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Request(RequestError::Timeout(_)))
    }

    /// True if this failure occurred at the transport boundary.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Request(RequestError::Transport(_)))
    }
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Error::Request(RequestError::Transport(err))
    }
}

/// Request construction and network failures.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The requested browser profile is not in the registry.
    #[error("unknown browser profile: {0}")]
    UnknownProfile(String),

    /// The request URL failed to parse.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A caller-supplied header name or value is malformed.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The timeout clock elapsed before the transport settled.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The transport engine reported a wire-level failure.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Failures reported by a [`Transport`](crate::transport::Transport)
/// implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection refused")]
    ConnectionRefused,
    #[error("connection reset")]
    ConnectionReset,
    #[error("name not resolved: {0}")]
    NameNotResolved(String),
    #[error("TLS handshake failed: {0}")]
    Tls(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

/// Body-state misuse. Distinct from [`RequestError`] so a programming error
/// is never mistaken for a network failure.
#[derive(Debug, Error)]
pub enum BodyError {
    /// The view was already consumed by a previous decode call.
    #[error("body already consumed")]
    AlreadyConsumed,

    /// `try_clone` was called after the view was consumed.
    #[error("cannot clone a consumed body")]
    CloneAfterConsume,

    /// The payload is not valid UTF-8 text.
    #[error("body is not valid UTF-8")]
    InvalidUtf8,

    /// The payload failed to parse as JSON.
    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),
}
