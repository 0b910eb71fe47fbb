use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub message: String,
    pub recorded_pings: usize,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        message: "Server is running.".to_owned(),
        recorded_pings: state.ledger.snapshot().await.len(),
    })
}
