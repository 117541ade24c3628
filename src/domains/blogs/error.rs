//! Blog-specific error types.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use super::schema::BlogId;

/// Result type for blog operations.
pub type BlogResult<T> = Result<T, BlogError>;

/// Errors that can occur during blog operations.
#[derive(Debug, Error)]
pub enum BlogError {
    /// The requested blog post does not exist.
    #[error("Blog not found: {0}")]
    NotFound(BlogId),

    /// The request payload or query violated a field constraint.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

impl BlogError {
    /// Create a new "not found" error.
    pub fn not_found(id: BlogId) -> Self {
        Self::NotFound(id)
    }

    /// Returns `true` if this is a [`BlogError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` if this is a [`BlogError::Validation`].
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// A single constraint violation, reported back to the client.
///
/// `loc` is the path to the offending value, e.g. `["body", "title"]` or
/// `["query", "limit"]`. `input` echoes the rejected value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub input: Value,
}

impl FieldError {
    pub fn new<L, S>(loc: L, msg: impl Into<String>, kind: &'static str, input: Value) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            loc: loc.into_iter().map(Into::into).collect(),
            msg: msg.into(),
            kind,
            input,
        }
    }

    /// String shorter than `min` characters.
    pub fn too_short(loc: &[&str], min: usize, input: &str) -> Self {
        Self::new(
            loc.iter().copied(),
            format!("String should have at least {min} characters"),
            "string_too_short",
            Value::from(input),
        )
    }

    /// String longer than `max` characters.
    pub fn too_long(loc: &[&str], max: usize, input: &str) -> Self {
        Self::new(
            loc.iter().copied(),
            format!("String should have at most {max} characters"),
            "string_too_long",
            Value::from(input),
        )
    }

    /// Explicit `null` for a field that cannot be cleared.
    pub fn null(loc: &[&str]) -> Self {
        Self::new(
            loc.iter().copied(),
            "Field may be omitted but not set to null",
            "null_not_allowed",
            Value::Null,
        )
    }

    /// Integer below the allowed minimum.
    pub fn less_than(loc: &[&str], min: i64, input: i64) -> Self {
        Self::new(
            loc.iter().copied(),
            format!("Input should be greater than or equal to {min}"),
            "greater_than_equal",
            Value::from(input),
        )
    }

    /// Integer above the allowed maximum.
    pub fn greater_than(loc: &[&str], max: i64, input: i64) -> Self {
        Self::new(
            loc.iter().copied(),
            format!("Input should be less than or equal to {max}"),
            "less_than_equal",
            Value::from(input),
        )
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.loc.join("."), self.msg)
    }
}

/// All violations found while checking one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
