pub mod predict;

use crate::state::SharedState;
use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    uptime_seconds: i64,
}

async fn health(State(state): State<SharedState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        uptime_seconds: (Utc::now() - state.started_at).num_seconds(),
    })
}

pub fn routes(state: SharedState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .with_state(state.clone())
        .merge(predict::router(state));
    Router::new().nest("/api", api)
}
