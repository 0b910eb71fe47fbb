use crate::errors::api_error::ApiError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};

/// Largest request body accepted as a ping reason, in bytes.
pub const MAX_REASON_BYTES: usize = 1024;

/// Plaintext ping reason read from the request body.
///
/// The body is buffered completely before the handler runs, so a client that
/// disconnects mid-upload never produces a ping. Invalid UTF-8 is replaced
/// rather than rejected.
#[derive(Debug)]
pub struct PingReason(pub String);

impl<S> FromRequest<S> for PingReason
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|err| {
            if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::ReasonTooLarge
            } else {
                ApiError::UnreadableBody(err.body_text())
            }
        })?;

        Ok(PingReason(String::from_utf8_lossy(&body).into_owned()))
    }
}
