//! Transport boundary: the wire engine consumed by the client.
//!
//! The client core never speaks the wire itself. It hands a frozen
//! [`RequestDescriptor`] to a [`Transport`] and gets back raw status, header
//! pairs in wire order, and body bytes. Fingerprint-emulating engines (TLS
//! handshake shape, H2 settings) plug in behind this trait; the descriptor's
//! fingerprint tag tells them which browser to impersonate.

pub mod h1;

use crate::base::error::TransportError;
use crate::request::RequestDescriptor;
use bytes::Bytes;
use futures::future::BoxFuture;
use http::StatusCode;

pub use h1::H1Transport;

/// Raw exchange result handed back by a transport.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Response status code.
    pub status: StatusCode,
    /// Header pairs in wire order, casing as received.
    pub headers: Vec<(String, String)>,
    /// Complete response payload.
    pub body: Bytes,
}

/// Wire engine boundary.
///
/// Implementations perform the network exchange for one descriptor. Dropping
/// the returned future is the cancellation path: implementations must not
/// leak the in-flight exchange when dropped mid-poll.
pub trait Transport: Send + Sync {
    /// Execute the request described by `request`.
    fn send<'a>(
        &'a self,
        request: &'a RequestDescriptor,
    ) -> BoxFuture<'a, Result<RawResponse, TransportError>>;
}
