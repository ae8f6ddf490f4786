//! # Domain Layer
//!
//! Business logic for the finance tracker. Services validate input with the
//! shared rule set, call storage through the [`crate::storage::Connection`]
//! abstraction and return domain models or a [`ServiceError`].
//!
//! ## Services
//!
//! - [`AuthService`]: registration, login and token lookup
//! - [`IncomeService`], [`ExpenseService`], [`BudgetService`]: CRUD over entries
//! - [`ReportService`]: CSV exports of the entry lists
//!
//! Services are generic over the connection type and cheap to clone; the
//! application state holds one instance of each.

pub mod auth_service;
pub mod budget_service;
pub mod errors;
pub mod expense_service;
pub mod income_service;
pub mod models;
pub mod report_service;
pub mod token;

pub use auth_service::AuthService;
pub use budget_service::BudgetService;
pub use errors::{ServiceError, ServiceResult};
pub use expense_service::ExpenseService;
pub use income_service::IncomeService;
pub use report_service::{ReportKind, ReportService};
pub use token::TokenIssuer;

use shared::fields::FieldSpec;
use shared::{FieldSource, Operation, ValidationScope};

/// Run the server-side rules for a request, reporting the first failure
pub(crate) fn check_request<S: FieldSource>(
    fields: &[FieldSpec],
    request: &S,
    operation: Operation,
) -> ServiceResult<()> {
    shared::validation::validate(fields, request, operation, ValidationScope::Server)
        .into_result()
        .map_err(ServiceError::Validation)
}

/// Trimmed text, empty when absent
pub(crate) fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}
