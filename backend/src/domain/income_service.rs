//! Income service domain logic.
//!
//! ## Business Rules
//!
//! - Source, category, type, amount, phone and date are required on create
//! - Description is required on create and optional on update
//! - The date is fixed at creation; updates never change it
//! - Amounts must be positive and phones exactly 10 digits
//! - Listing returns the most recent date first

use std::sync::Arc;

use shared::fields::INCOME_FIELDS;
use shared::validation::parse_date;
use shared::{IncomeRequest, Operation};
use tracing::info;

use crate::domain::errors::{ServiceError, ServiceResult};
use crate::domain::models::income::{DomainIncome, IncomeChanges};
use crate::domain::{check_request, trimmed};
use crate::storage::{Connection, IncomeStorage};

#[derive(Clone)]
pub struct IncomeService<C: Connection> {
    income_repository: C::IncomeRepository,
}

impl<C: Connection> IncomeService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            income_repository: connection.create_income_repository(),
        }
    }

    pub async fn list(&self) -> ServiceResult<Vec<DomainIncome>> {
        Ok(self.income_repository.list_incomes().await?)
    }

    pub async fn get_by_id(&self, income_id: &str) -> ServiceResult<DomainIncome> {
        self.income_repository
            .get_income(income_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Income"))
    }

    pub async fn create(&self, request: IncomeRequest) -> ServiceResult<DomainIncome> {
        check_request(INCOME_FIELDS, &request, Operation::Create)?;

        let date = request
            .date
            .as_deref()
            .and_then(parse_date)
            .ok_or_else(|| ServiceError::Validation("Date must be a valid date".to_string()))?;

        let income = DomainIncome {
            id: DomainIncome::generate_id(),
            income_source: trimmed(request.income_source),
            description: trimmed(request.description),
            income_category: trimmed(request.income_category),
            income_type: trimmed(request.income_type),
            amount: request.amount.unwrap_or_default(),
            date,
            phone: trimmed(request.phone),
        };

        self.income_repository.store_income(&income).await?;
        info!("Created income {} ({} {})", income.id, income.income_source, income.amount);
        Ok(income)
    }

    pub async fn update(&self, income_id: &str, request: IncomeRequest) -> ServiceResult<DomainIncome> {
        check_request(INCOME_FIELDS, &request, Operation::Update)?;

        let mut income = self.get_by_id(income_id).await?;
        income.apply(IncomeChanges {
            income_source: trimmed(request.income_source),
            description: request
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            income_category: trimmed(request.income_category),
            income_type: trimmed(request.income_type),
            amount: request.amount.unwrap_or_default(),
            phone: trimmed(request.phone),
        });

        if !self.income_repository.update_income(&income).await? {
            return Err(ServiceError::not_found("Income"));
        }

        info!("Updated income {}", income.id);
        Ok(income)
    }

    pub async fn delete(&self, income_id: &str) -> ServiceResult<()> {
        if !self.income_repository.delete_income(income_id).await? {
            return Err(ServiceError::not_found("Income"));
        }

        info!("Deleted income {}", income_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DbConnection;
    use chrono::NaiveDate;

    async fn setup_test() -> IncomeService<DbConnection> {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        IncomeService::new(Arc::new(db))
    }

    fn request() -> IncomeRequest {
        IncomeRequest {
            income_source: Some("Rental Income".to_string()),
            description: Some("Flat rent".to_string()),
            income_category: Some("business".to_string()),
            income_type: Some("Monthly".to_string()),
            amount: Some(45000.0),
            date: Some("2024-03-01".to_string()),
            phone: Some("0771234567".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_values() {
        let service = setup_test().await;
        let created = service.create(request()).await.unwrap();

        let fetched = service.get_by_id(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.income_source, "Rental Income");
        assert_eq!(fetched.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[tokio::test]
    async fn test_create_missing_field_persists_nothing() {
        let service = setup_test().await;
        let mut incomplete = request();
        incomplete.income_type = None;

        let result = service.create(incomplete).await;
        assert!(matches!(result, Err(ServiceError::Validation(ref m)) if m == "Income Type is required"));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_bad_amount_and_phone() {
        let service = setup_test().await;

        let mut zero = request();
        zero.amount = Some(0.0);
        let result = service.create(zero).await;
        assert!(matches!(result, Err(ServiceError::Validation(ref m)) if m == "Amount must be a positive number"));

        let mut short_phone = request();
        short_phone.phone = Some("12345".to_string());
        let result = service.create(short_phone).await;
        assert!(matches!(
            result,
            Err(ServiceError::Validation(ref m)) if m == "Phone number must be exactly 10 digits and contain only numbers"
        ));
    }

    #[tokio::test]
    async fn test_update_keeps_date_and_optional_description() {
        let service = setup_test().await;
        let created = service.create(request()).await.unwrap();

        let mut changes = request();
        changes.amount = Some(50000.0);
        changes.description = None;
        changes.date = Some("2030-01-01".to_string());

        let updated = service.update(&created.id, changes).await.unwrap();
        assert_eq!(updated.amount, 50000.0);
        assert_eq!(updated.description, "Flat rent");
        assert_eq!(updated.date, created.date);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let service = setup_test().await;

        assert!(matches!(service.get_by_id("missing").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(service.update("missing", request()).await, Err(ServiceError::NotFound(_))));
        for _ in 0..2 {
            assert!(matches!(service.delete("missing").await, Err(ServiceError::NotFound(_))));
        }
    }

    #[tokio::test]
    async fn test_list_sorted_by_date_descending() {
        let service = setup_test().await;
        for date in ["2024-01-10", "2024-03-05", "2024-02-20"] {
            let mut r = request();
            r.date = Some(date.to_string());
            service.create(r).await.unwrap();
        }

        let dates: Vec<String> = service
            .list()
            .await
            .unwrap()
            .iter()
            .map(|i| i.date.to_string())
            .collect();
        assert_eq!(dates, vec!["2024-03-05", "2024-02-20", "2024-01-10"]);
    }
}
