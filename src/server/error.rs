use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

use crate::foundation::error::FathomError;

/// A [`FathomError`] on its way to the client as `{"error": "..."}`, optionally with extra
/// top-level fields.
#[derive(Debug)]
pub struct ApiError {
    err: FathomError,
    details: Map<String, Value>,
}

impl ApiError {
    /// Attach an extra field to the error body.
    pub fn with_detail(mut self, key: &str, value: Value) -> Self {
        self.details.insert(key.to_string(), value);
        self
    }

    /// The underlying error.
    pub fn error(&self) -> &FathomError {
        &self.err
    }

    /// Status the error is reported with.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<FathomError> for ApiError {
    fn from(err: FathomError) -> Self {
        Self {
            err,
            details: Map::new(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(err = %self.err, "request failed");
        } else {
            tracing::debug!(err = %self.err, %status, "request rejected");
        }

        let mut body = Map::new();
        body.insert("error".to_string(), Value::String(self.err.public_message()));
        body.extend(self.details);
        (status, Json(Value::Object(body))).into_response()
    }
}
