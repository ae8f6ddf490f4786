//! # REST API for Report Exports

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::{error, info};

use crate::domain::ReportKind;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/:kind/csv", get(export_csv))
}

/// Download the full list of incomes, expenses or budgets as CSV
pub async fn export_csv(State(state): State<AppState>, Path(kind): Path<String>) -> impl IntoResponse {
    info!("GET /api/reports/{}/csv", kind);

    let kind = match kind.parse::<ReportKind>() {
        Ok(kind) => kind,
        Err(e) => return e.into_response(),
    };

    match state.report_service.export_csv(kind).await {
        Ok(export) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", export.filename),
                ),
            ],
            export.content,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to export {:?}: {}", kind, e);
            e.into_response()
        }
    }
}
