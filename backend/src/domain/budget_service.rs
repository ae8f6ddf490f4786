//! Budget service domain logic.
//!
//! Amount, category, start date and phone are required; notes and the
//! responsible person are optional. The category is stored as given: the
//! closed category list is enforced by the dashboard form only.

use std::sync::Arc;

use shared::fields::BUDGET_FIELDS;
use shared::validation::parse_date;
use shared::{BudgetRequest, Operation};
use tracing::info;

use crate::domain::errors::{ServiceError, ServiceResult};
use crate::domain::models::budget::DomainBudget;
use crate::domain::{check_request, trimmed};
use crate::storage::{BudgetStorage, Connection};

#[derive(Clone)]
pub struct BudgetService<C: Connection> {
    budget_repository: C::BudgetRepository,
}

impl<C: Connection> BudgetService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            budget_repository: connection.create_budget_repository(),
        }
    }

    pub async fn list(&self) -> ServiceResult<Vec<DomainBudget>> {
        Ok(self.budget_repository.list_budgets().await?)
    }

    pub async fn get_by_id(&self, budget_id: &str) -> ServiceResult<DomainBudget> {
        self.budget_repository
            .get_budget(budget_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Budget"))
    }

    fn build(id: String, request: BudgetRequest, operation: Operation) -> ServiceResult<DomainBudget> {
        check_request(BUDGET_FIELDS, &request, operation)?;

        let start_date = request
            .start_date
            .as_deref()
            .and_then(parse_date)
            .ok_or_else(|| ServiceError::Validation("Start Date must be a valid date".to_string()))?;

        Ok(DomainBudget {
            id,
            amount: request.amount.unwrap_or_default(),
            category: trimmed(request.category),
            notes: trimmed(request.notes),
            start_date,
            responsible_person: trimmed(request.responsible_person),
            phone: trimmed(request.phone),
        })
    }

    pub async fn create(&self, request: BudgetRequest) -> ServiceResult<DomainBudget> {
        let budget = Self::build(DomainBudget::generate_id(), request, Operation::Create)?;

        self.budget_repository.store_budget(&budget).await?;
        info!("Created budget {} ({} {})", budget.id, budget.category, budget.amount);
        Ok(budget)
    }

    pub async fn update(&self, budget_id: &str, request: BudgetRequest) -> ServiceResult<DomainBudget> {
        let budget = Self::build(budget_id.to_string(), request, Operation::Update)?;

        if !self.budget_repository.update_budget(&budget).await? {
            return Err(ServiceError::not_found("Budget"));
        }

        info!("Updated budget {}", budget.id);
        Ok(budget)
    }

    pub async fn delete(&self, budget_id: &str) -> ServiceResult<()> {
        if !self.budget_repository.delete_budget(budget_id).await? {
            return Err(ServiceError::not_found("Budget"));
        }

        info!("Deleted budget {}", budget_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DbConnection;

    async fn setup_test() -> BudgetService<DbConnection> {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        BudgetService::new(Arc::new(db))
    }

    fn request() -> BudgetRequest {
        BudgetRequest {
            amount: Some(20000.0),
            category: Some("Sales and Distribution".to_string()),
            notes: Some("Trade fair".to_string()),
            start_date: Some("2024-05-01".to_string()),
            responsible_person: Some("Ruwan".to_string()),
            phone: Some("0761234567".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_and_list_budgets() {
        let service = setup_test().await;
        let first = service.create(request()).await.unwrap();
        let second = service.create(request()).await.unwrap();

        let listed = service.list().await.unwrap();
        assert_eq!(listed, vec![first, second]);
    }

    #[tokio::test]
    async fn test_category_outside_form_list_is_stored() {
        let service = setup_test().await;
        let mut r = request();
        r.category = Some("Travel".to_string());

        let created = service.create(r).await.unwrap();
        assert_eq!(created.category, "Travel");
    }

    #[tokio::test]
    async fn test_invalid_start_date_rejected() {
        let service = setup_test().await;
        let mut r = request();
        r.start_date = Some("next tuesday".to_string());

        let result = service.create(r).await;
        assert!(matches!(result, Err(ServiceError::Validation(ref m)) if m == "Start Date must be a valid date"));
    }

    #[tokio::test]
    async fn test_update_missing_budget() {
        let service = setup_test().await;
        let result = service.update("missing", request()).await;
        assert!(matches!(result, Err(ServiceError::NotFound(ref m)) if m == "Budget not found"));
    }
}
