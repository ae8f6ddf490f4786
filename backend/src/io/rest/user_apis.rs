//! # REST API for User Accounts
//!
//! Registration, login and the current-user lookup behind a bearer token.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use shared::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use tracing::{error, info};

use crate::domain::ServiceError;
use crate::io::rest::extract::{bearer_token, ApiJson};
use crate::io::rest::mappers::UserMapper;
use crate::AppState;

/// Create a router for user related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(current_user))
}

/// Register a new account
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> impl IntoResponse {
    info!("POST /api/users/register - email: {:?}", request.email);

    match state.auth_service.register(request).await {
        Ok(_) => (
            StatusCode::CREATED,
            Json(MessageResponse::new("User registered successfully")),
        )
            .into_response(),
        Err(e) => {
            error!("Registration failed: {}", e);
            e.into_response()
        }
    }
}

/// Log in and receive a bearer token
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> impl IntoResponse {
    info!("POST /api/users/login - email: {:?}", request.email);

    match state.auth_service.login(request).await {
        Ok(outcome) => {
            let response = LoginResponse {
                token: outcome.token,
                user_id: outcome.user_id,
                message: "Login successful".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Login failed: {}", e);
            e.into_response()
        }
    }
}

/// Profile of the user the bearer token was issued for
pub async fn current_user(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    info!("GET /api/users/me");

    let Some(token) = bearer_token(&headers) else {
        return ServiceError::Unauthorized("Missing bearer token".to_string()).into_response();
    };

    match state.auth_service.current_user(token).await {
        Ok(user) => (StatusCode::OK, Json(UserMapper::to_profile(user))).into_response(),
        Err(e) => {
            error!("Token lookup failed: {}", e);
            e.into_response()
        }
    }
}
