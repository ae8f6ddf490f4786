//! # Finance Tracker Backend
//!
//! REST server for the finance tracker dashboard.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (Business logic, services)
//!     ↓
//! Storage Layer (SQLite via sqlx)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Initialize the database and the domain services
//! - Set up the REST API router with CORS for the dashboard origin
//! - Serve the built frontend for every non-API path

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{AuthService, BudgetService, ExpenseService, IncomeService, ReportService, TokenIssuer};
use crate::io::rest::{budget_apis, expense_apis, income_apis, logging_apis, report_apis, user_apis};
use crate::storage::DbConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService<DbConnection>,
    pub income_service: IncomeService<DbConnection>,
    pub expense_service: ExpenseService<DbConnection>,
    pub budget_service: BudgetService<DbConnection>,
    pub report_service: ReportService<DbConnection>,
}

impl AppState {
    pub fn new(db_conn: Arc<DbConnection>, tokens: TokenIssuer) -> Self {
        let income_service = IncomeService::new(db_conn.clone());
        let expense_service = ExpenseService::new(db_conn.clone());
        let budget_service = BudgetService::new(db_conn.clone());
        let report_service = ReportService::new(
            income_service.clone(),
            expense_service.clone(),
            budget_service.clone(),
        );

        Self {
            auth_service: AuthService::new(db_conn, tokens),
            income_service,
            expense_service,
            budget_service,
            report_service,
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db_conn = Arc::new(DbConnection::new(&config.database_url).await?);

    info!("Setting up domain services");
    let tokens = TokenIssuer::new(config.jwt_secret.as_bytes(), config.token_ttl_secs);

    Ok(AppState::new(db_conn, tokens))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/users", user_apis::router())
        .nest("/incomes", income_apis::router())
        .nest("/expenses", expense_apis::router())
        .nest("/Expenses", expense_apis::router())
        .nest("/budgets", budget_apis::router())
        .nest("/reports", report_apis::router())
        .route("/logs", post(logging_apis::log_message))
        .route("/health", get(logging_apis::health));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
        .with_state(app_state)
}
