//! Built-in health endpoint

use rocket::serde::json::Json;
use rocket::{get, State};
use serde::Serialize;

/// State shared with the built-in handlers
pub struct ServerState {
    /// Application name reported by the health endpoint
    pub app_name: String,
}

/// Health check payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the server answers at all
    pub status: &'static str,
    /// Application name
    pub app: String,
}

/// Liveness probe
#[get("/health")]
pub fn health(state: &State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        app: state.app_name.clone(),
    })
}
