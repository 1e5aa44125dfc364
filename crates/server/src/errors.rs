use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::StoreError;
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"error": <title>, "message": <detail>}`; `message` is omitted when empty.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, message: Option<String>) -> Self {
        Self { status, error: error.into(), message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = match self.message {
            Some(message) => serde_json::json!({ "error": self.error, "message": message }),
            None => serde_json::json!({ "error": self.error }),
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<StoreError> for JsonApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg)),
            StoreError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg, None),
            StoreError::Unavailable(msg) => {
                error!(error = %msg, "student store unavailable");
                Self::new(StatusCode::SERVICE_UNAVAILABLE, "Store Unavailable", Some(msg))
            }
        }
    }
}

/// Undecodable request bodies are validation failures, not axum's default 415/422.
impl From<JsonRejection> for JsonApiError {
    fn from(e: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.body_text()))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("storage bootstrap failed: {0}")]
    Storage(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_distinct_statuses() {
        let cases = [
            (StoreError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (StoreError::student_not_found(), StatusCode::NOT_FOUND),
            (StoreError::no_name_matches(), StatusCode::NOT_FOUND),
            (StoreError::unavailable("down"), StatusCode::SERVICE_UNAVAILABLE),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn not_found_keeps_message_as_error_title() {
        let e = JsonApiError::from(StoreError::student_not_found());
        assert_eq!(e.error, "Student not found");
        assert!(e.message.is_none());
    }
}
