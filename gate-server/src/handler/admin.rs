//! Admin Handlers

use std::sync::OnceLock;
use std::time::SystemTime;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;

/// Server status returned to administrators
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub version: &'static str,
    pub environment: String,
    pub uptime_seconds: u64,
}

// Process start time (lazily initialized)
static START_TIME: OnceLock<SystemTime> = OnceLock::new();

fn get_uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Server status - admin only
pub async fn status(State(state): State<ServerState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        uptime_seconds: get_uptime_seconds(),
    })
}
