//! Mapping of errors onto HTTP responses.
//!
//! | Error | Status | Body |
//! |---|---|---|
//! | `BlogError::NotFound` | 404 | `{"detail": "Blog not found"}` |
//! | `BlogError::Validation` | 422 | `{"detail": [FieldError, ...]}` |
//! | anything else | 500 | `{"detail": "Internal server error"}` |
//!
//! Extractor rejections (bad JSON, bad query string, bad path id) are folded
//! into validation errors so clients see a single error shape.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tracing::error;

use crate::core::Error;
use crate::domains::blogs::{BlogError, FieldError};

impl Error {
    /// The HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Blog(BlogError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Blog(BlogError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            Self::Blog(BlogError::NotFound(_)) => json!({ "detail": "Blog not found" }),
            Self::Blog(BlogError::Validation(errors)) => json!({ "detail": errors }),
            other => {
                error!("Request failed: {}", other);
                json!({ "detail": "Internal server error" })
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "value_error",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "body_error",
        };
        FieldError::new(["body"], rejection.body_text(), kind, Value::Null).into()
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        FieldError::new(["query"], rejection.body_text(), "query_invalid", Value::Null).into()
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        FieldError::new(["path", "id"], rejection.body_text(), "uuid_parsing", Value::Null).into()
    }
}
