//! Error types and handling for the blog server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies. The HTTP transport turns it into a
//! response in `core::transport::response`.

use thiserror::Error;

use crate::domains::blogs::{BlogError, FieldError, ValidationErrors};

/// A specialized Result type for blog server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the blog server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the blogs domain.
    #[error("Blog error: {0}")]
    Blog(#[from] BlogError),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Self::Blog(BlogError::Validation(errors))
    }
}

impl From<FieldError> for Error {
    fn from(error: FieldError) -> Self {
        ValidationErrors::from(error).into()
    }
}
