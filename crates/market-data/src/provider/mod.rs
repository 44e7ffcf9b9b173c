//! Remote API clients.
//!
//! This module contains:
//! - The `HttpTransport` trait every request goes through
//! - `ClientConfig`, the base origin and default headers of one API
//! - `ApiClient`, the shared URL building and JSON decoding
//! - Concrete clients for Gamma, CLOB and the Data API
//!
//! Clients are cheap to clone. Build one `ClientConfig` per API at startup,
//! wrap it in an `Arc` and hand it to every client of that API.

mod client;
mod config;
mod traits;
mod transport;
#[cfg(any(test, feature = "test-util"))]
mod stub;

pub mod clob;
pub mod data_api;
pub mod gamma;

// Re-exports
pub use client::{extract_error_message, ApiClient};
pub use config::ClientConfig;
pub use traits::{HttpTransport, RawResponse};
pub use transport::ReqwestTransport;
#[cfg(any(test, feature = "test-util"))]
pub use stub::StubTransport;
