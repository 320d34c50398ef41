//! Single-consumption response body views.
//!
//! The payload lives in one reference-counted immutable buffer
//! ([`bytes::Bytes`]); each view carries its own consumption flag. Cloning a
//! view before it is consumed yields an independent view over the same bytes,
//! so the original and the clone can each be decoded exactly once without
//! copying the payload.

use crate::base::error::BodyError;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicBool, Ordering};

/// One consumable view over a buffered response payload.
#[derive(Debug)]
pub struct ResponseBody {
    /// Shared by all views of the same response; never mutated.
    buf: Bytes,
    /// Per-view flag. Flips unused -> used atomically with the decode call.
    used: AtomicBool,
}

impl ResponseBody {
    /// Wrap raw payload bytes in a fresh, unconsumed view.
    pub fn new(buf: Bytes) -> Self {
        Self {
            buf,
            used: AtomicBool::new(false),
        }
    }

    /// Whether this view has been consumed by a decode call.
    pub fn is_used(&self) -> bool {
        self.used.load(Ordering::Acquire)
    }

    /// Payload length in bytes. Does not consume the view.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if the payload is empty. Does not consume the view.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Claim this view's single decode. The swap guarantees exactly one
    /// caller wins when misused concurrently.
    fn consume(&self) -> Result<Bytes, BodyError> {
        if self.used.swap(true, Ordering::AcqRel) {
            return Err(BodyError::AlreadyConsumed);
        }
        Ok(self.buf.clone())
    }

    /// Read the payload as raw bytes. Consumes the view.
    pub fn bytes(&self) -> Result<Bytes, BodyError> {
        self.consume()
    }

    /// Read the payload as UTF-8 text. Consumes the view.
    pub fn text(&self) -> Result<String, BodyError> {
        let bytes = self.consume()?;
        String::from_utf8(bytes.to_vec()).map_err(|_| BodyError::InvalidUtf8)
    }

    /// Read the payload as JSON, deserializing to `T`. Consumes the view.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, BodyError> {
        let bytes = self.consume()?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Create an independent view over the same underlying bytes.
    ///
    /// Must be called before this view is consumed; afterwards it fails with
    /// [`BodyError::CloneAfterConsume`]. The clone's consumption state starts
    /// fresh and never affects this view.
    pub fn try_clone(&self) -> Result<ResponseBody, BodyError> {
        if self.is_used() {
            return Err(BodyError::CloneAfterConsume);
        }
        Ok(Self {
            buf: self.buf.clone(),
            used: AtomicBool::new(false),
        })
    }
}
