use crate::{errors::api_error::ApiError, state::AppState};
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::warn;

/// Proof that the request carried the operator token.
///
/// Declared before any body extractor so unauthenticated requests are
/// rejected without reading their body.
#[derive(Debug)]
pub struct OperatorAuth;

impl FromRequestParts<AppState> for OperatorAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts.headers.get(AUTHORIZATION);
        let authorization = header.and_then(|value| value.to_str().ok());

        if state.authenticator.is_authorized(authorization) {
            Ok(OperatorAuth)
        } else {
            warn!(
                header_present = header.is_some(),
                "Rejected ping with missing or invalid operator token."
            );
            Err(ApiError::Unauthorized)
        }
    }
}
