use crate::{extractors::ping_reason::MAX_REASON_BYTES, state::AppState};
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use health_check::health_check;
use ping::submit_ping;
use status::status_page;
use tower_http::trace::TraceLayer;

pub mod health_check;
pub mod ping;
pub mod status;

/// Builds the router. The canary is a single endpoint: every path other than
/// `/health_check` serves the status page on `GET` and takes pings on `POST`.
pub fn register_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(status_page).post(submit_ping))
        .route("/health_check", get(health_check))
        .fallback(get(status_page).post(submit_ping))
        .layer(DefaultBodyLimit::max(MAX_REASON_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
