//! Transport layer for the blog server.
//!
//! The server speaks plain HTTP/JSON through axum. This module owns the
//! listener lifecycle, the route table, and the translation of domain
//! errors into HTTP responses.

mod config;
mod error;
pub mod http;
mod response;

pub use config::{DEFAULT_PORT, HttpConfig};
pub use error::{TransportError, TransportResult};
pub use http::{HttpTransport, build_router};
