//! # mimicnet
//!
//! A fetch-compatible HTTP client with browser fingerprint emulation.
//!
//! `mimicnet` exposes the standard fetch programming model (`fetch`,
//! `Headers`, `Response`) while emulating the network fingerprint of real
//! browsers: ordered default header sets per browser profile, strict header
//! order and casing preservation, and a fingerprint tag carried through to
//! the transport engine that shapes the TLS handshake.
//!
//! ## Features
//!
//! - **Browser Profiles**: chrome/firefox/safari/edge identifiers mapping to
//!   fingerprint tags and ordered default headers
//! - **Ordered Headers**: case-insensitive multimap preserving insertion
//!   order and original casing
//! - **Fetch Semantics**: single-consumption bodies, clone-before-consume,
//!   `json`/`text`/`bytes` decode views
//! - **Cancellation**: per-request timeout racing an external abort signal,
//!   abort winning ties
//! - **Pluggable Transport**: wire engines implement one trait; a plain
//!   HTTP/1.1 engine is bundled
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mimicnet::{fetch, FetchOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mimicnet::Error> {
//!     let response = fetch("http://localhost:8080/get", FetchOptions {
//!         browser: Some("chrome_142".into()),
//!         ..Default::default()
//!     })
//!     .await?;
//!     println!("Status: {}", response.status());
//!     println!("Body: {}", response.text()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error taxonomy
//! - [`http`] - Headers, response, and body views
//! - [`emulation`] - Browser profile registry and fingerprint tags
//! - [`request`] - Frozen request descriptors
//! - [`cancel`] - Abort signals and the timeout race
//! - [`transport`] - Wire engine boundary and the bundled HTTP/1.1 engine
//! - [`client`] - `fetch` and the configurable `Client`

pub mod base;
pub mod cancel;
pub mod client;
pub mod emulation;
pub mod http;
pub mod request;
pub mod transport;

pub use base::error::{BodyError, Error, RequestError, TransportError};
pub use cancel::{AbortController, AbortSignal};
pub use client::{fetch, get_profiles, Client, ClientBuilder};
pub use emulation::{BrowserFamily, BrowserProfile, FingerprintTag};
pub use http::{Headers, Response, ResponseBody};
pub use request::{FetchOptions, HeaderInit, RequestDescriptor};
