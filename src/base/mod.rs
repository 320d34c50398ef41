//! Base types and error handling.
//!
//! Provides the failure classification shared across the crate:
//! - [`Error`]: top-level result of a fetch operation
//! - [`RequestError`]: construction and network failures
//! - [`BodyError`]: local body-state misuse

pub mod error;

pub use error::{BodyError, Error, RequestError, TransportError};
