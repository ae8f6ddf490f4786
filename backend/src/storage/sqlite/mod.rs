//! SQLite storage backed by a sqlx connection pool.

pub mod connection;
pub mod repositories;

pub use connection::DbConnection;
pub use repositories::{BudgetRepository, ExpenseRepository, IncomeRepository, UserRepository};

use crate::storage::traits::Connection;

impl Connection for DbConnection {
    type UserRepository = UserRepository;
    type IncomeRepository = IncomeRepository;
    type ExpenseRepository = ExpenseRepository;
    type BudgetRepository = BudgetRepository;

    fn create_user_repository(&self) -> Self::UserRepository {
        UserRepository::new(self.clone())
    }

    fn create_income_repository(&self) -> Self::IncomeRepository {
        IncomeRepository::new(self.clone())
    }

    fn create_expense_repository(&self) -> Self::ExpenseRepository {
        ExpenseRepository::new(self.clone())
    }

    fn create_budget_repository(&self) -> Self::BudgetRepository {
        BudgetRepository::new(self.clone())
    }
}
