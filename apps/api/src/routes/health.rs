use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /status, GET /health
/// Liveness probe used by `check-servers`; also reports the enhancer mode.
pub async fn status_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "resume-assistant",
        "version": env!("CARGO_PKG_VERSION"),
        "mode": state.enhancer.mode(),
    }))
}
