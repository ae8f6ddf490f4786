//! # REST API for Expenses
//!
//! CRUD endpoints under `/api/expenses`, also mounted at `/api/Expenses`
//! for clients that use the capitalised path.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::{ExpenseRequest, MessageResponse};
use tracing::{error, info};

use crate::io::rest::extract::ApiJson;
use crate::io::rest::mappers::ExpenseMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_expenses).post(create_expense))
        .route("/:id", get(get_expense).put(update_expense).delete(delete_expense))
}

pub async fn list_expenses(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/expenses");

    match state.expense_service.list().await {
        Ok(expenses) => (StatusCode::OK, Json(ExpenseMapper::to_dto_list(expenses))).into_response(),
        Err(e) => {
            error!("Failed to list expenses: {}", e);
            e.into_response()
        }
    }
}

pub async fn get_expense(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    info!("GET /api/expenses/{}", id);

    match state.expense_service.get_by_id(&id).await {
        Ok(expense) => (StatusCode::OK, Json(ExpenseMapper::to_dto(expense))).into_response(),
        Err(e) => {
            error!("Failed to get expense {}: {}", id, e);
            e.into_response()
        }
    }
}

pub async fn create_expense(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ExpenseRequest>,
) -> impl IntoResponse {
    info!("POST /api/expenses - request: {:?}", request);

    match state.expense_service.create(request).await {
        Ok(expense) => (StatusCode::CREATED, Json(ExpenseMapper::to_dto(expense))).into_response(),
        Err(e) => {
            error!("Failed to create expense: {}", e);
            e.into_response()
        }
    }
}

pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<ExpenseRequest>,
) -> impl IntoResponse {
    info!("PUT /api/expenses/{} - request: {:?}", id, request);

    match state.expense_service.update(&id, request).await {
        Ok(expense) => (StatusCode::OK, Json(ExpenseMapper::to_dto(expense))).into_response(),
        Err(e) => {
            error!("Failed to update expense {}: {}", id, e);
            e.into_response()
        }
    }
}

pub async fn delete_expense(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    info!("DELETE /api/expenses/{}", id);

    match state.expense_service.delete(&id).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::new("Expense deleted successfully"))).into_response(),
        Err(e) => {
            error!("Failed to delete expense {}: {}", id, e);
            e.into_response()
        }
    }
}
