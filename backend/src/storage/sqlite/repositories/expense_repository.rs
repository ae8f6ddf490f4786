use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::expense::DomainExpense;
use crate::storage::sqlite::connection::{parse_stored_date, DbConnection};
use crate::storage::traits::ExpenseStorage;

/// Repository for expense entries
#[derive(Clone)]
pub struct ExpenseRepository {
    db: DbConnection,
}

impl ExpenseRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Result<DomainExpense> {
        let date: String = row.get("date");
        Ok(DomainExpense {
            id: row.get("id"),
            name: row.get("name"),
            description: row.get("description"),
            category: row.get("category"),
            amount: row.get("amount"),
            date: parse_stored_date(&date)?,
            responsible_person: row.get("responsible_person"),
            notes: row.get("notes"),
            phone: row.get("phone"),
        })
    }
}

#[async_trait]
impl ExpenseStorage for ExpenseRepository {
    async fn store_expense(&self, expense: &DomainExpense) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO expenses (id, name, description, category, amount, date, responsible_person, notes, phone)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&expense.id)
        .bind(&expense.name)
        .bind(&expense.description)
        .bind(&expense.category)
        .bind(expense.amount)
        .bind(expense.date.to_string())
        .bind(&expense.responsible_person)
        .bind(&expense.notes)
        .bind(&expense.phone)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_expense(&self, expense_id: &str) -> Result<Option<DomainExpense>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, category, amount, date, responsible_person, notes, phone
            FROM expenses
            WHERE id = ?
            "#,
        )
        .bind(expense_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn list_expenses(&self) -> Result<Vec<DomainExpense>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, category, amount, date, responsible_person, notes, phone
            FROM expenses
            ORDER BY ROWID ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn update_expense(&self, expense: &DomainExpense) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE expenses
            SET name = ?, description = ?, category = ?, amount = ?, date = ?,
                responsible_person = ?, notes = ?, phone = ?
            WHERE id = ?
            "#,
        )
        .bind(&expense.name)
        .bind(&expense.description)
        .bind(&expense.category)
        .bind(expense.amount)
        .bind(expense.date.to_string())
        .bind(&expense.responsible_person)
        .bind(&expense.notes)
        .bind(&expense.phone)
        .bind(&expense.id)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = ?")
            .bind(expense_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    async fn setup_test() -> ExpenseRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        ExpenseRepository::new(db)
    }

    fn expense(name: &str, day: u32) -> DomainExpense {
        DomainExpense {
            id: DomainExpense::generate_id(),
            name: name.to_string(),
            description: "Office supplies".to_string(),
            category: "Administrative".to_string(),
            amount: 75.5,
            date: NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
            responsible_person: "Sunil".to_string(),
            notes: String::new(),
            phone: "0112345678".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = setup_test().await;
        for (name, day) in [("Zeta", 9), ("Alpha", 1), ("Mid", 5)] {
            repo.store_expense(&expense(name, day)).await.expect("Failed to store expense");
        }

        let listed = repo.list_expenses().await.expect("Failed to list expenses");
        let names: Vec<&str> = listed.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_expense() {
        let repo = setup_test().await;
        let mut stored = expense("Stationers", 2);
        repo.store_expense(&stored).await.expect("Failed to store expense");

        stored.notes = "Paid in cash".to_string();
        assert!(repo.update_expense(&stored).await.expect("Update failed"));
        let fetched = repo.get_expense(&stored.id).await.expect("Get failed");
        assert_eq!(fetched, Some(stored.clone()));

        assert!(repo.delete_expense(&stored.id).await.expect("Delete failed"));
        assert!(repo.get_expense(&stored.id).await.expect("Get failed").is_none());
    }
}
