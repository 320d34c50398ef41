//! Frozen per-request descriptor and its construction rules.
//!
//! Construction is fully synchronous and fail-fast: profile resolution,
//! header validation, and default-header merging all complete before any
//! network activity, so an invalid request never causes a partial exchange.
//! Once built, a descriptor is immutable; reusing one across concurrent
//! requests is safe.

use crate::base::error::RequestError;
use crate::cancel::AbortSignal;
use crate::emulation::{self, FingerprintTag};
use crate::http::Headers;
use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::Method;
use std::time::Duration;
use url::Url;

/// Caller-supplied header set: an explicit [`Headers`] map or a plain
/// ordered pair sequence. Both preserve the caller's declared order.
#[derive(Debug, Clone)]
pub enum HeaderInit {
    /// A pre-built header map.
    Map(Headers),
    /// Ordered `(name, value)` pairs.
    Pairs(Vec<(String, String)>),
}

impl HeaderInit {
    fn into_headers(self) -> Headers {
        match self {
            HeaderInit::Map(headers) => headers,
            HeaderInit::Pairs(pairs) => Headers::from_pairs(pairs),
        }
    }
}

impl From<Headers> for HeaderInit {
    fn from(headers: Headers) -> Self {
        HeaderInit::Map(headers)
    }
}

impl From<Vec<(String, String)>> for HeaderInit {
    fn from(pairs: Vec<(String, String)>) -> Self {
        HeaderInit::Pairs(pairs)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for HeaderInit {
    fn from(pairs: [(&str, &str); N]) -> Self {
        HeaderInit::Pairs(
            pairs
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Per-call request configuration recognized by [`fetch`](crate::fetch).
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Browser profile identifier, e.g. `chrome_142`. Falls back to the
    /// client's default profile when absent.
    pub browser: Option<String>,
    /// HTTP method. Defaults to GET.
    pub method: Method,
    /// Caller headers, applied on top of profile defaults.
    pub headers: Option<HeaderInit>,
    /// Request payload.
    pub body: Option<Bytes>,
    /// Per-request timeout. Falls back to the client's default timeout.
    pub timeout: Option<Duration>,
    /// External cancellation signal.
    pub signal: Option<AbortSignal>,
    /// Skip the profile's default header set entirely.
    pub disable_default_headers: bool,
}

/// Immutable description of one outgoing request.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    url: Url,
    method: Method,
    headers: Headers,
    body: Bytes,
    fingerprint: FingerprintTag,
    timeout: Option<Duration>,
    signal: Option<AbortSignal>,
    disable_default_headers: bool,
}

impl RequestDescriptor {
    /// Build a descriptor from a URL and options.
    ///
    /// `fallback_profile` and `fallback_timeout` come from the owning client
    /// and apply when the options leave them unset.
    pub fn new(
        url: &str,
        options: FetchOptions,
        fallback_profile: &str,
        fallback_timeout: Option<Duration>,
    ) -> Result<Self, RequestError> {
        let url = Url::parse(url)?;

        let profile_id = options.browser.as_deref().unwrap_or(fallback_profile);
        let profile = emulation::resolve(profile_id)?;

        let caller = options
            .headers
            .map(HeaderInit::into_headers)
            .unwrap_or_default();
        validate_headers(&caller)?;

        let headers = if options.disable_default_headers {
            caller
        } else {
            // Defaults first in registry order, caller entries on top.
            // Colliding names extend the default's joined value so the
            // emulated tokens survive alongside the caller's.
            let mut merged = profile.default_headers();
            for (name, value) in caller.entries() {
                merged.append(name, value);
            }
            merged
        };

        Ok(Self {
            url,
            method: options.method,
            headers,
            body: options.body.unwrap_or_default(),
            fingerprint: profile.fingerprint(),
            timeout: options.timeout.or(fallback_timeout),
            signal: options.signal,
            disable_default_headers: options.disable_default_headers,
        })
    }

    /// Target URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Merged, frozen header set in send order.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Request payload. Empty for body-less methods.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Fingerprint tag resolved from the browser profile.
    pub fn fingerprint(&self) -> FingerprintTag {
        self.fingerprint
    }

    /// Effective timeout for this request.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// External cancellation signal, if any.
    pub fn signal(&self) -> Option<&AbortSignal> {
        self.signal.as_ref()
    }

    /// Whether profile default headers were suppressed.
    pub fn default_headers_disabled(&self) -> bool {
        self.disable_default_headers
    }
}

/// Reject malformed caller headers before any network activity.
fn validate_headers(headers: &Headers) -> Result<(), RequestError> {
    for (name, value) in headers.entries() {
        HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| RequestError::InvalidHeader(name.to_string()))?;
        HeaderValue::from_str(value)
            .map_err(|_| RequestError::InvalidHeader(name.to_string()))?;
    }
    Ok(())
}
