use axum::{extract::State, response::Json};
use serde::Serialize;
use shared::LogEntry;
use tracing::{debug, error, info, warn};

use crate::io::rest::extract::ApiJson;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub success: bool,
}

/// Re-emit a browser log line through the backend's tracing subscriber
pub async fn log_message(
    State(_app_state): State<AppState>,
    ApiJson(request): ApiJson<LogEntry>,
) -> Json<LogResponse> {
    let component = request.component.as_deref().unwrap_or("frontend");
    let message = format!("[{}] {}", component, request.message);

    match request.level.to_lowercase().as_str() {
        "debug" => debug!("{}", message),
        "info" => info!("{}", message),
        "warn" => warn!("{}", message),
        "error" => error!("{}", message),
        _ => info!("{}", message),
    }

    Json(LogResponse { success: true })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
