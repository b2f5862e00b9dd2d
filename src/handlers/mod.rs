//! API handlers

mod application;
mod catalog;
mod contact;
mod organization;

pub use application::*;
pub use catalog::*;
pub use contact::*;
pub use organization::*;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

pub async fn root() -> &'static str {
    "RS Finance Service API Server"
}

/// Plain liveness string on the public surface
pub async fn public_health() -> &'static str {
    "RS Finance Service API is running"
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub version: String,
}

/// Health check endpoint with a database probe
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match crate::db::check_health(&state.db_pool).await {
        Ok(()) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    let status = if database == "connected" {
        "healthy"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        database,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
