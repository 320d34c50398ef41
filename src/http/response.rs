//! HTTP response with fetch-style body access.

use crate::base::error::BodyError;
use crate::http::body::ResponseBody;
use crate::http::headers::Headers;
use crate::transport::RawResponse;
use http::StatusCode;
use serde::de::DeserializeOwned;

/// Completed response: status, headers in wire order, and one consumable
/// body view.
///
/// Immutable apart from the body view's consumption state. `try_clone`
/// produces a response whose body is an independent view over the same
/// underlying bytes.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    headers: Headers,
    body: ResponseBody,
}

impl Response {
    /// Assemble from raw transport output. Header pairs are folded into a
    /// [`Headers`] map preserving wire order and first-seen casing.
    pub fn from_raw(raw: RawResponse) -> Self {
        Self {
            status: raw.status,
            headers: Headers::from_pairs(raw.headers),
            body: ResponseBody::new(raw.body),
        }
    }

    /// Response status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers in wire order.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Whether this response's body view has been consumed.
    pub fn body_used(&self) -> bool {
        self.body.is_used()
    }

    /// Direct access to the body view.
    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// Decode the body as UTF-8 text. Consumes the body view.
    pub fn text(&self) -> Result<String, BodyError> {
        self.body.text()
    }

    /// Decode the body as JSON into `T`. Consumes the body view.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, BodyError> {
        self.body.json()
    }

    /// Read the body as raw bytes. Consumes the body view.
    pub fn bytes(&self) -> Result<bytes::Bytes, BodyError> {
        self.body.bytes()
    }

    /// Clone this response before its body is consumed.
    ///
    /// The clone shares the payload bytes but owns an independent
    /// consumption flag; consuming one never affects the other. Fails with
    /// [`BodyError::CloneAfterConsume`] once this response's body is used.
    pub fn try_clone(&self) -> Result<Response, BodyError> {
        Ok(Self {
            status: self.status,
            headers: self.headers.clone(),
            body: self.body.try_clone()?,
        })
    }
}
