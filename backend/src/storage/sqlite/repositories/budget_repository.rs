use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::budget::DomainBudget;
use crate::storage::sqlite::connection::{parse_stored_date, DbConnection};
use crate::storage::traits::BudgetStorage;

/// Repository for budget plan entries
#[derive(Clone)]
pub struct BudgetRepository {
    db: DbConnection,
}

impl BudgetRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Result<DomainBudget> {
        let start_date: String = row.get("start_date");
        Ok(DomainBudget {
            id: row.get("id"),
            amount: row.get("amount"),
            category: row.get("category"),
            notes: row.get("notes"),
            start_date: parse_stored_date(&start_date)?,
            responsible_person: row.get("responsible_person"),
            phone: row.get("phone"),
        })
    }
}

#[async_trait]
impl BudgetStorage for BudgetRepository {
    async fn store_budget(&self, budget: &DomainBudget) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO budgets (id, amount, category, notes, start_date, responsible_person, phone)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&budget.id)
        .bind(budget.amount)
        .bind(&budget.category)
        .bind(&budget.notes)
        .bind(budget.start_date.to_string())
        .bind(&budget.responsible_person)
        .bind(&budget.phone)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_budget(&self, budget_id: &str) -> Result<Option<DomainBudget>> {
        let row = sqlx::query(
            r#"
            SELECT id, amount, category, notes, start_date, responsible_person, phone
            FROM budgets
            WHERE id = ?
            "#,
        )
        .bind(budget_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn list_budgets(&self) -> Result<Vec<DomainBudget>> {
        let rows = sqlx::query(
            r#"
            SELECT id, amount, category, notes, start_date, responsible_person, phone
            FROM budgets
            ORDER BY ROWID ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn update_budget(&self, budget: &DomainBudget) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE budgets
            SET amount = ?, category = ?, notes = ?, start_date = ?, responsible_person = ?, phone = ?
            WHERE id = ?
            "#,
        )
        .bind(budget.amount)
        .bind(&budget.category)
        .bind(&budget.notes)
        .bind(budget.start_date.to_string())
        .bind(&budget.responsible_person)
        .bind(&budget.phone)
        .bind(&budget.id)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_budget(&self, budget_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM budgets WHERE id = ?")
            .bind(budget_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_budget_crud() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let repo = BudgetRepository::new(db);

        let mut budget = DomainBudget {
            id: DomainBudget::generate_id(),
            amount: 5000.0,
            category: "IT and Software".to_string(),
            notes: "Licences".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            responsible_person: "Priya".to_string(),
            phone: "0779876543".to_string(),
        };
        repo.store_budget(&budget).await.expect("Failed to store budget");

        let listed = repo.list_budgets().await.expect("Failed to list budgets");
        assert_eq!(listed, vec![budget.clone()]);

        budget.amount = 6500.0;
        assert!(repo.update_budget(&budget).await.expect("Update failed"));
        assert_eq!(repo.get_budget(&budget.id).await.expect("Get failed"), Some(budget.clone()));

        assert!(repo.delete_budget(&budget.id).await.expect("Delete failed"));
        assert!(!repo.delete_budget(&budget.id).await.expect("Delete failed"));
    }
}
