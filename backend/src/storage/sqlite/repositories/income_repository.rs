use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::income::DomainIncome;
use crate::storage::sqlite::connection::{parse_stored_date, DbConnection};
use crate::storage::traits::IncomeStorage;

/// Repository for income entries
#[derive(Clone)]
pub struct IncomeRepository {
    db: DbConnection,
}

impl IncomeRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Result<DomainIncome> {
        let date: String = row.get("date");
        Ok(DomainIncome {
            id: row.get("id"),
            income_source: row.get("income_source"),
            description: row.get("description"),
            income_category: row.get("income_category"),
            income_type: row.get("income_type"),
            amount: row.get("amount"),
            date: parse_stored_date(&date)?,
            phone: row.get("phone"),
        })
    }
}

#[async_trait]
impl IncomeStorage for IncomeRepository {
    async fn store_income(&self, income: &DomainIncome) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO incomes (id, income_source, description, income_category, income_type, amount, date, phone)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&income.id)
        .bind(&income.income_source)
        .bind(&income.description)
        .bind(&income.income_category)
        .bind(&income.income_type)
        .bind(income.amount)
        .bind(income.date.to_string())
        .bind(&income.phone)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_income(&self, income_id: &str) -> Result<Option<DomainIncome>> {
        let row = sqlx::query(
            r#"
            SELECT id, income_source, description, income_category, income_type, amount, date, phone
            FROM incomes
            WHERE id = ?
            "#,
        )
        .bind(income_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn list_incomes(&self) -> Result<Vec<DomainIncome>> {
        let rows = sqlx::query(
            r#"
            SELECT id, income_source, description, income_category, income_type, amount, date, phone
            FROM incomes
            ORDER BY date DESC, ROWID DESC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn update_income(&self, income: &DomainIncome) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE incomes
            SET income_source = ?, description = ?, income_category = ?, income_type = ?,
                amount = ?, date = ?, phone = ?
            WHERE id = ?
            "#,
        )
        .bind(&income.income_source)
        .bind(&income.description)
        .bind(&income.income_category)
        .bind(&income.income_type)
        .bind(income.amount)
        .bind(income.date.to_string())
        .bind(&income.phone)
        .bind(&income.id)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_income(&self, income_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM incomes WHERE id = ?")
            .bind(income_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
