//! Blog API Library
//!
//! A small blog CRUD service: posts are created, listed, fetched, partially
//! updated, deleted and searched by title over HTTP. All state lives in
//! memory and is lost when the process exits.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the shared server handle and
//!   the axum-based HTTP transport
//! - **domains**: business logic organized by bounded contexts
//!   - **blogs**: schema, in-memory store, pagination and search
//!   - **comments**: comments attached to a blog post
//!
//! # Example
//!
//! ```rust,no_run
//! use blog_api::core::{BlogServer, Config, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = HttpTransport::new(config.transport.clone());
//!     transport.run(BlogServer::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{BlogServer, Config, Error, Result};
