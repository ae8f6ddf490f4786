//! # REST API Interface Layer
//!
//! HTTP endpoints for the finance tracker. This layer handles:
//! - JSON request/response serialization
//! - Translating [`crate::domain::ServiceError`] into status codes with a
//!   `{message}` body
//! - Mapping domain models to the DTOs in the `shared` crate
//! - Request logging
//!
//! No business rules live here; handlers call exactly one service method.

pub mod budget_apis;
pub mod errors;
pub mod expense_apis;
pub mod extract;
pub mod income_apis;
pub mod logging_apis;
pub mod mappers;
pub mod report_apis;
pub mod user_apis;
