//! # REST API for Incomes
//!
//! CRUD endpoints under `/api/incomes`. Listing returns the most recent
//! income first.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::{IncomeRequest, MessageResponse};
use tracing::{error, info};

use crate::io::rest::extract::ApiJson;
use crate::io::rest::mappers::IncomeMapper;
use crate::AppState;

/// Create a router for income related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_incomes).post(create_income))
        .route("/:id", get(get_income).put(update_income).delete(delete_income))
}

pub async fn list_incomes(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/incomes");

    match state.income_service.list().await {
        Ok(incomes) => (StatusCode::OK, Json(IncomeMapper::to_dto_list(incomes))).into_response(),
        Err(e) => {
            error!("Failed to list incomes: {}", e);
            e.into_response()
        }
    }
}

pub async fn get_income(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    info!("GET /api/incomes/{}", id);

    match state.income_service.get_by_id(&id).await {
        Ok(income) => (StatusCode::OK, Json(IncomeMapper::to_dto(income))).into_response(),
        Err(e) => {
            error!("Failed to get income {}: {}", id, e);
            e.into_response()
        }
    }
}

pub async fn create_income(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<IncomeRequest>,
) -> impl IntoResponse {
    info!("POST /api/incomes - request: {:?}", request);

    match state.income_service.create(request).await {
        Ok(income) => (StatusCode::CREATED, Json(IncomeMapper::to_dto(income))).into_response(),
        Err(e) => {
            error!("Failed to create income: {}", e);
            e.into_response()
        }
    }
}

pub async fn update_income(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<IncomeRequest>,
) -> impl IntoResponse {
    info!("PUT /api/incomes/{} - request: {:?}", id, request);

    match state.income_service.update(&id, request).await {
        Ok(income) => (StatusCode::OK, Json(IncomeMapper::to_dto(income))).into_response(),
        Err(e) => {
            error!("Failed to update income {}: {}", id, e);
            e.into_response()
        }
    }
}

pub async fn delete_income(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    info!("DELETE /api/incomes/{}", id);

    match state.income_service.delete(&id).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::new("Income deleted successfully"))).into_response(),
        Err(e) => {
            error!("Failed to delete income {}: {}", id, e);
            e.into_response()
        }
    }
}
