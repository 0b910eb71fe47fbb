use crate::{
    extractors::{operator_auth::OperatorAuth, ping_reason::PingReason},
    state::AppState,
};
use axum::extract::State;
use tracing::{info, instrument};

/// Axum handler that records an authenticated ping.
///
/// # Errors
/// - Returns `401 Unauthorized` when the operator token is missing or wrong.
/// - Returns `413 Payload Too Large` when the reason exceeds the body limit.
#[instrument(skip_all)]
pub async fn submit_ping(
    State(state): State<AppState>,
    _auth: OperatorAuth,
    PingReason(reason): PingReason,
) -> &'static str {
    let record = state.ledger.record(reason).await;

    info!(
        timestamp = %record.timestamp,
        reason_len = record.reason.len(),
        "Recorded ping."
    );

    "Ok"
}
