#![allow(dead_code)] // not every test binary uses every helper

//! Shared transport double for integration tests.
//!
//! Stands in for the wire engine: records each descriptor it is handed and
//! replies with a canned payload, a JSON reflection of the request, or
//! nothing at all (for cancellation tests).

use bytes::Bytes;
use futures::future::BoxFuture;
use http::StatusCode;
use mimicnet::request::RequestDescriptor;
use mimicnet::transport::{RawResponse, Transport};
use mimicnet::TransportError;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
pub enum Reply {
    /// Fixed status/headers/body.
    Canned {
        status: StatusCode,
        headers: Vec<(String, String)>,
        body: Bytes,
    },
    /// JSON reflection of the request: `headers` object, `rawHeaders` flat
    /// name/value array (wire order), `method`, `url`.
    Echo,
    /// Never settles. The client's race must resolve the request.
    Never,
    /// Fails with a connection-refused transport error.
    Refused,
}

/// What the transport was asked to send.
#[derive(Clone)]
pub struct SentRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

struct Inner {
    calls: AtomicUsize,
    delay: Option<Duration>,
    reply: Reply,
    last_request: Mutex<Option<SentRequest>>,
}

#[derive(Clone)]
pub struct MockTransport {
    inner: Arc<Inner>,
}

impl MockTransport {
    fn with_reply(reply: Reply, delay: Option<Duration>) -> Self {
        Self {
            inner: Arc::new(Inner {
                calls: AtomicUsize::new(0),
                delay,
                reply,
                last_request: Mutex::new(None),
            }),
        }
    }

    /// Reflect each request back as JSON.
    pub fn echo() -> Self {
        Self::with_reply(Reply::Echo, None)
    }

    /// Always reply 200 with the given body.
    pub fn canned(content_type: &str, body: impl Into<Bytes>) -> Self {
        Self::with_reply(
            Reply::Canned {
                status: StatusCode::OK,
                headers: vec![("Content-Type".into(), content_type.into())],
                body: body.into(),
            },
            None,
        )
    }

    /// Never settle; the request can only end via timeout or abort.
    pub fn never() -> Self {
        Self::with_reply(Reply::Never, None)
    }

    /// Fail every exchange with a connection-refused error.
    pub fn refused() -> Self {
        Self::with_reply(Reply::Refused, None)
    }

    /// Sleep before replying.
    pub fn delayed(self, delay: Duration) -> Self {
        Self::with_reply(self.inner.reply.clone(), Some(delay))
    }

    /// Number of times `send` was invoked.
    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    /// The most recent request handed to the transport.
    pub fn last_request(&self) -> Option<SentRequest> {
        self.inner.last_request.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    fn send<'a>(
        &'a self,
        request: &'a RequestDescriptor,
    ) -> BoxFuture<'a, Result<RawResponse, TransportError>> {
        Box::pin(async move {
            self.inner.calls.fetch_add(1, Ordering::SeqCst);

            let sent = SentRequest {
                method: request.method().to_string(),
                url: request.url().to_string(),
                headers: request
                    .headers()
                    .entries()
                    .map(|(n, v)| (n.to_string(), v.to_string()))
                    .collect(),
                body: request.body().to_vec(),
            };
            *self.inner.last_request.lock().unwrap() = Some(sent);

            if let Some(delay) = self.inner.delay {
                tokio::time::sleep(delay).await;
            }

            match &self.inner.reply {
                Reply::Canned {
                    status,
                    headers,
                    body,
                } => Ok(RawResponse {
                    status: *status,
                    headers: headers.clone(),
                    body: body.clone(),
                }),
                Reply::Echo => {
                    let mut headers_obj = serde_json::Map::new();
                    let mut raw_headers = Vec::new();
                    for (name, value) in request.headers().entries() {
                        headers_obj.insert(name.to_string(), json!(value));
                        raw_headers.push(name.to_string());
                        raw_headers.push(value.to_string());
                    }
                    let body = json!({
                        "method": request.method().to_string(),
                        "url": request.url().to_string(),
                        "headers": headers_obj,
                        "rawHeaders": raw_headers,
                    });
                    Ok(RawResponse {
                        status: StatusCode::OK,
                        headers: vec![("Content-Type".into(), "application/json".into())],
                        body: Bytes::from(body.to_string()),
                    })
                }
                Reply::Never => {
                    std::future::pending::<()>().await;
                    unreachable!()
                }
                Reply::Refused => Err(TransportError::ConnectionRefused),
            }
        })
    }
}

/// Index of a header name in a flat `rawHeaders` name/value array, matching
/// case-insensitively on name positions only.
pub fn header_index(raw_headers: &[serde_json::Value], name: &str) -> Option<usize> {
    raw_headers.iter().enumerate().position(|(i, value)| {
        i % 2 == 0
            && value
                .as_str()
                .is_some_and(|v| v.eq_ignore_ascii_case(name))
    })
}
