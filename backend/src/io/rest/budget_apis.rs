//! # REST API for Budgets

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::{BudgetRequest, MessageResponse};
use tracing::{error, info};

use crate::io::rest::extract::ApiJson;
use crate::io::rest::mappers::BudgetMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_budgets).post(create_budget))
        .route("/:id", get(get_budget).put(update_budget).delete(delete_budget))
}

pub async fn list_budgets(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/budgets");

    match state.budget_service.list().await {
        Ok(budgets) => (StatusCode::OK, Json(BudgetMapper::to_dto_list(budgets))).into_response(),
        Err(e) => {
            error!("Failed to list budgets: {}", e);
            e.into_response()
        }
    }
}

pub async fn get_budget(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    info!("GET /api/budgets/{}", id);

    match state.budget_service.get_by_id(&id).await {
        Ok(budget) => (StatusCode::OK, Json(BudgetMapper::to_dto(budget))).into_response(),
        Err(e) => {
            error!("Failed to get budget {}: {}", id, e);
            e.into_response()
        }
    }
}

pub async fn create_budget(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BudgetRequest>,
) -> impl IntoResponse {
    info!("POST /api/budgets - request: {:?}", request);

    match state.budget_service.create(request).await {
        Ok(budget) => (StatusCode::CREATED, Json(BudgetMapper::to_dto(budget))).into_response(),
        Err(e) => {
            error!("Failed to create budget: {}", e);
            e.into_response()
        }
    }
}

pub async fn update_budget(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<BudgetRequest>,
) -> impl IntoResponse {
    info!("PUT /api/budgets/{} - request: {:?}", id, request);

    match state.budget_service.update(&id, request).await {
        Ok(budget) => (StatusCode::OK, Json(BudgetMapper::to_dto(budget))).into_response(),
        Err(e) => {
            error!("Failed to update budget {}: {}", id, e);
            e.into_response()
        }
    }
}

pub async fn delete_budget(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    info!("DELETE /api/budgets/{}", id);

    match state.budget_service.delete(&id).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::new("Budget deleted successfully"))).into_response(),
        Err(e) => {
            error!("Failed to delete budget {}: {}", id, e);
            e.into_response()
        }
    }
}
