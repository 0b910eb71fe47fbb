use axum::{
    http::{header::WWW_AUTHENTICATE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::extractors::ping_reason::MAX_REASON_BYTES;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("missing or invalid operator token")]
    Unauthorized,
    #[error("ping reason exceeds {} bytes", MAX_REASON_BYTES)]
    ReasonTooLarge,
    #[error("failed to read request body: {0}")]
    UnreadableBody(String),
    #[error("internal server error")]
    InternalServerError,
}

#[derive(Serialize)]
struct ApiErrorResponse {
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "Missing or invalid operator token.".to_owned(),
            ),
            ApiError::ReasonTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "Payload Too Large",
                format!("Ping reason must be at most {MAX_REASON_BYTES} bytes."),
            ),
            ApiError::UnreadableBody(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "Something bad happened.".to_owned(),
            ),
        };

        let body = ApiErrorResponse { error, message };
        let mut response = (status, Json(body)).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<tera::Error> for ApiError {
    fn from(err: tera::Error) -> Self {
        tracing::error!(error = ?err, "Failed to render template");
        ApiError::InternalServerError
    }
}
