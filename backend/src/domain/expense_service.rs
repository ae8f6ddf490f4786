//! Expense service domain logic.
//!
//! Name, description, category, amount, date and phone are required on both
//! create and update; responsible person and notes are optional. Expenses
//! are listed in the order they were recorded.

use std::sync::Arc;

use shared::fields::EXPENSE_FIELDS;
use shared::validation::parse_date;
use shared::{ExpenseRequest, Operation};
use tracing::info;

use crate::domain::errors::{ServiceError, ServiceResult};
use crate::domain::models::expense::DomainExpense;
use crate::domain::{check_request, trimmed};
use crate::storage::{Connection, ExpenseStorage};

#[derive(Clone)]
pub struct ExpenseService<C: Connection> {
    expense_repository: C::ExpenseRepository,
}

impl<C: Connection> ExpenseService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            expense_repository: connection.create_expense_repository(),
        }
    }

    pub async fn list(&self) -> ServiceResult<Vec<DomainExpense>> {
        Ok(self.expense_repository.list_expenses().await?)
    }

    pub async fn get_by_id(&self, expense_id: &str) -> ServiceResult<DomainExpense> {
        self.expense_repository
            .get_expense(expense_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Expense"))
    }

    /// Validate a request and build the expense it describes
    fn build(id: String, request: ExpenseRequest, operation: Operation) -> ServiceResult<DomainExpense> {
        check_request(EXPENSE_FIELDS, &request, operation)?;

        let date = request
            .date
            .as_deref()
            .and_then(parse_date)
            .ok_or_else(|| ServiceError::Validation("Date must be a valid date".to_string()))?;

        Ok(DomainExpense {
            id,
            name: trimmed(request.name),
            description: trimmed(request.description),
            category: trimmed(request.category),
            amount: request.amount.unwrap_or_default(),
            date,
            responsible_person: trimmed(request.responsible_person),
            notes: trimmed(request.notes),
            phone: trimmed(request.phone),
        })
    }

    pub async fn create(&self, request: ExpenseRequest) -> ServiceResult<DomainExpense> {
        let expense = Self::build(DomainExpense::generate_id(), request, Operation::Create)?;

        self.expense_repository.store_expense(&expense).await?;
        info!("Created expense {} ({} {})", expense.id, expense.category, expense.amount);
        Ok(expense)
    }

    pub async fn update(&self, expense_id: &str, request: ExpenseRequest) -> ServiceResult<DomainExpense> {
        let expense = Self::build(expense_id.to_string(), request, Operation::Update)?;

        if !self.expense_repository.update_expense(&expense).await? {
            return Err(ServiceError::not_found("Expense"));
        }

        info!("Updated expense {}", expense.id);
        Ok(expense)
    }

    pub async fn delete(&self, expense_id: &str) -> ServiceResult<()> {
        if !self.expense_repository.delete_expense(expense_id).await? {
            return Err(ServiceError::not_found("Expense"));
        }

        info!("Deleted expense {}", expense_id);
        Ok(())
    }
}
