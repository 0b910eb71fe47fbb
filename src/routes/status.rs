use crate::{errors::api_error::ApiError, state::AppState};
use axum::{
    extract::State,
    http::header::CACHE_CONTROL,
    response::{Html, IntoResponse},
};
use chrono::Utc;
use tracing::{debug, instrument};

/// Axum handler for the public status page listing the most recent pings.
#[instrument(skip_all, err)]
pub async fn status_page(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let pings = state.ledger.snapshot().await;
    debug!(pings = pings.len(), "Rendering status page.");

    let html = state.status_page.render(&pings, Utc::now())?;

    Ok(([(CACHE_CONTROL, "no-store")], Html(html)))
}
