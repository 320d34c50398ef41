//! Client surface: [`fetch`], [`Client`], and the process-wide default
//! client.
//!
//! # Example
//!
//! ```rust,ignore
//! use mimicnet::{fetch, FetchOptions};
//!
//! let response = fetch("http://localhost:8080/json", FetchOptions {
//!     browser: Some("chrome_142".into()),
//!     timeout: Some(std::time::Duration::from_secs(10)),
//!     ..Default::default()
//! })
//! .await?;
//!
//! let body: serde_json::Value = response.json()?;
//! ```

use crate::base::error::Error;
use crate::cancel;
use crate::emulation;
use crate::http::Response;
use crate::request::{FetchOptions, RequestDescriptor};
use crate::transport::{H1Transport, Transport};
use once_cell::sync::Lazy;
use std::sync::Arc;
use std::time::Duration;

// Global client backing the free `fetch` function.
static DEFAULT_CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// Perform a request through the process-wide default client.
pub async fn fetch(url: &str, options: FetchOptions) -> Result<Response, Error> {
    DEFAULT_CLIENT.fetch(url, options).await
}

/// All registered browser profile identifiers, in registration order.
pub fn get_profiles() -> Vec<&'static str> {
    emulation::profile_names()
}

/// HTTP client bound to one transport engine.
///
/// Cheap to clone; concurrent requests share no mutable state.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    default_profile: String,
    default_timeout: Option<Duration>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Create a client over the bundled HTTP/1.1 transport.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Build a descriptor and dispatch it.
    pub async fn fetch(&self, url: &str, options: FetchOptions) -> Result<Response, Error> {
        let descriptor =
            RequestDescriptor::new(url, options, &self.default_profile, self.default_timeout)?;
        self.dispatch(&descriptor).await
    }

    /// Dispatch a previously built descriptor.
    ///
    /// Descriptors are immutable, so one descriptor may be dispatched any
    /// number of times, concurrently or sequentially.
    pub async fn dispatch(&self, request: &RequestDescriptor) -> Result<Response, Error> {
        if request.signal().map_or(false, |s| s.aborted()) {
            tracing::debug!(url = %request.url(), "aborted before dispatch");
            return Err(Error::Abort);
        }

        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            fingerprint = %request.fingerprint(),
            timeout = ?request.timeout(),
            "dispatching request"
        );

        let raw = cancel::race(
            self.transport.send(request),
            request.timeout(),
            request.signal(),
        )
        .await?;

        Ok(Response::from_raw(raw))
    }
}

/// Builder for creating a [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    transport: Option<Arc<dyn Transport>>,
    default_profile: Option<String>,
    default_timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Set the transport engine. Defaults to the bundled [`H1Transport`].
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Set the profile used when a request names none.
    pub fn default_profile(mut self, profile: impl Into<String>) -> Self {
        self.default_profile = Some(profile.into());
        self
    }

    /// Set the timeout applied when a request names none.
    pub fn default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Client {
        Client {
            transport: self
                .transport
                .unwrap_or_else(|| Arc::new(H1Transport::new())),
            default_profile: self
                .default_profile
                .unwrap_or_else(|| "chrome_142".to_string()),
            default_timeout: self.default_timeout,
        }
    }
}
