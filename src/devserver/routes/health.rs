//! Health Route
//!
//! - GET /health - Liveness and uptime

use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::devserver::state::DevState;

/// GET /health
pub async fn health(State(state): State<Arc<DevState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_seconds": state.uptime_seconds(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
