//! Spreadsheet exports of the income, expense and budget lists.
//!
//! Reports are built with the shared [`TabularReport`] so the CSV columns
//! match the printable reports the dashboard renders.

use std::str::FromStr;

use anyhow::anyhow;
use shared::{
    Budget, BudgetResource, EntryResource, Expense, ExpenseResource, Income, IncomeResource, TabularReport,
};
use tracing::info;

use crate::domain::budget_service::BudgetService;
use crate::domain::errors::{ServiceError, ServiceResult};
use crate::domain::expense_service::ExpenseService;
use crate::domain::income_service::IncomeService;
use crate::storage::Connection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Incomes,
    Expenses,
    Budgets,
}

impl FromStr for ReportKind {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "incomes" => Ok(ReportKind::Incomes),
            "expenses" => Ok(ReportKind::Expenses),
            "budgets" => Ok(ReportKind::Budgets),
            _ => Err(ServiceError::NotFound(format!("Unknown report: {}", s))),
        }
    }
}

/// A rendered CSV file
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub content: Vec<u8>,
}

#[derive(Clone)]
pub struct ReportService<C: Connection> {
    income_service: IncomeService<C>,
    expense_service: ExpenseService<C>,
    budget_service: BudgetService<C>,
}

impl<C: Connection> ReportService<C> {
    pub fn new(
        income_service: IncomeService<C>,
        expense_service: ExpenseService<C>,
        budget_service: BudgetService<C>,
    ) -> Self {
        Self {
            income_service,
            expense_service,
            budget_service,
        }
    }

    /// Build the full-detail report for `kind`
    pub async fn build_report(&self, kind: ReportKind) -> ServiceResult<TabularReport> {
        let report = match kind {
            ReportKind::Incomes => {
                let incomes: Vec<Income> = self.income_service.list().await?.into_iter().map(Income::from).collect();
                TabularReport::for_entries::<IncomeResource>(&incomes)
            }
            ReportKind::Expenses => {
                let expenses: Vec<Expense> = self.expense_service.list().await?.into_iter().map(Expense::from).collect();
                TabularReport::for_entries::<ExpenseResource>(&expenses)
            }
            ReportKind::Budgets => {
                let budgets: Vec<Budget> = self.budget_service.list().await?.into_iter().map(Budget::from).collect();
                TabularReport::for_entries::<BudgetResource>(&budgets)
            }
        };
        Ok(report)
    }

    pub async fn export_csv(&self, kind: ReportKind) -> ServiceResult<CsvExport> {
        let report = self.build_report(kind).await?;
        let content = write_csv(&report)?;

        let collection = match kind {
            ReportKind::Incomes => IncomeResource::COLLECTION,
            ReportKind::Expenses => ExpenseResource::COLLECTION,
            ReportKind::Budgets => BudgetResource::COLLECTION,
        };

        info!("Exported {} {} rows as CSV", report.rows.len(), collection);
        Ok(CsvExport {
            filename: format!("{}_report.csv", collection),
            content,
        })
    }
}

fn write_csv(report: &TabularReport) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&report.columns)?;
    for row in &report.rows {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to finish CSV export: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DbConnection;
    use shared::IncomeRequest;
    use std::sync::Arc;

    async fn setup_test() -> ReportService<DbConnection> {
        let db = Arc::new(DbConnection::init_test().await.expect("Failed to create test database"));
        ReportService::new(
            IncomeService::new(db.clone()),
            ExpenseService::new(db.clone()),
            BudgetService::new(db),
        )
    }

    #[test]
    fn test_report_kind_parsing() {
        assert_eq!("incomes".parse::<ReportKind>().unwrap(), ReportKind::Incomes);
        assert_eq!("Expenses".parse::<ReportKind>().unwrap(), ReportKind::Expenses);
        assert!(matches!("users".parse::<ReportKind>(), Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_income_csv_export() {
        let service = setup_test().await;
        service
            .income_service
            .create(IncomeRequest {
                income_source: Some("Royalties".to_string()),
                description: Some("Song, \"live\" edition".to_string()),
                income_category: Some("business".to_string()),
                income_type: Some("Annually".to_string()),
                amount: Some(1200.0),
                date: Some("2024-01-15".to_string()),
                phone: Some("0771234567".to_string()),
            })
            .await
            .unwrap();

        let export = service.export_csv(ReportKind::Incomes).await.unwrap();
        let text = String::from_utf8(export.content).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(export.filename, "incomes_report.csv");
        assert_eq!(lines[0], "Income Source,Category,Type,Amount,Description,Date");
        assert_eq!(
            lines[1],
            r#"Royalties,business,Annually,Rs 1200.00,"Song, ""live"" edition",2024-01-15"#
        );
    }

    #[tokio::test]
    async fn test_empty_export_has_header_only() {
        let service = setup_test().await;
        let export = service.export_csv(ReportKind::Budgets).await.unwrap();
        let text = String::from_utf8(export.content).unwrap();

        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Category,Amount,Start Date"));
    }
}
