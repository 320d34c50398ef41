//! Bundled plain-HTTP/1.1 transport built on hyper.
//!
//! Covers the `http://` scheme only: local servers, test fixtures, plaintext
//! upstreams. TLS fingerprint emulation lives in external engines implementing
//! [`Transport`] against the same boundary; this implementation carries the
//! descriptor's header order through to the wire but leaves header casing to
//! hyper's HTTP/1.1 codec.

use crate::base::error::TransportError;
use crate::request::RequestDescriptor;
use crate::transport::{RawResponse, Transport};
use bytes::Bytes;
use futures::future::BoxFuture;
use http::header::{HeaderName, HeaderValue};
use http_body_util::{BodyExt, Full};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client as HyperClient;
use hyper_util::rt::TokioExecutor;

/// HTTP/1.1 transport over TCP.
#[derive(Clone)]
pub struct H1Transport {
    client: HyperClient<HttpConnector, Full<Bytes>>,
}

impl Default for H1Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl H1Transport {
    /// Create a transport with hyper's default connection handling.
    pub fn new() -> Self {
        Self {
            client: HyperClient::builder(TokioExecutor::new()).build_http(),
        }
    }
}

impl Transport for H1Transport {
    fn send<'a>(
        &'a self,
        request: &'a RequestDescriptor,
    ) -> BoxFuture<'a, Result<RawResponse, TransportError>> {
        Box::pin(async move {
            let url = request.url();
            if url.scheme() != "http" {
                return Err(TransportError::UnsupportedScheme(url.scheme().to_string()));
            }

            let mut builder = http::Request::builder()
                .method(request.method().clone())
                .uri(url.as_str());

            for (name, value) in request.headers().entries() {
                let name = HeaderName::from_bytes(name.as_bytes())
                    .map_err(|_| TransportError::Other(format!("invalid header name: {name}")))?;
                let value = HeaderValue::from_str(value)
                    .map_err(|_| TransportError::Other(format!("invalid header value: {name}")))?;
                builder = builder.header(name, value);
            }

            let body = Full::new(request.body().clone());
            let outgoing = builder
                .body(body)
                .map_err(|e| TransportError::Other(e.to_string()))?;

            tracing::debug!(
                method = %request.method(),
                url = %url,
                fingerprint = %request.fingerprint(),
                "h1 exchange starting"
            );

            let response = self.client.request(outgoing).await.map_err(map_hyper_err)?;

            let status = response.status();
            let headers = response
                .headers()
                .iter()
                .map(|(n, v)| {
                    (
                        n.as_str().to_string(),
                        String::from_utf8_lossy(v.as_bytes()).into_owned(),
                    )
                })
                .collect();

            let body = response
                .into_body()
                .collect()
                .await
                .map_err(|e| TransportError::MalformedResponse(e.to_string()))?
                .to_bytes();

            tracing::debug!(status = %status, bytes = body.len(), "h1 exchange complete");

            Ok(RawResponse {
                status,
                headers,
                body,
            })
        })
    }
}

fn map_hyper_err(err: hyper_util::client::legacy::Error) -> TransportError {
    if err.is_connect() {
        TransportError::ConnectionRefused
    } else {
        TransportError::Other(err.to_string())
    }
}
