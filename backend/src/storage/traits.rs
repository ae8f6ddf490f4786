//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::budget::DomainBudget;
use crate::domain::models::expense::DomainExpense;
use crate::domain::models::income::DomainIncome;
use crate::domain::models::user::User;

/// Trait defining the interface for user account storage
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Store a newly registered user; `false` when the email is already taken
    async fn store_user(&self, user: &User) -> Result<bool>;

    /// Look a user up by email (emails are unique)
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Look a user up by ID
    async fn get_user(&self, user_id: &str) -> Result<Option<User>>;
}

/// Trait defining the interface for income storage operations
#[async_trait]
pub trait IncomeStorage: Send + Sync {
    async fn store_income(&self, income: &DomainIncome) -> Result<()>;

    async fn get_income(&self, income_id: &str) -> Result<Option<DomainIncome>>;

    /// List all incomes, most recent date first
    async fn list_incomes(&self) -> Result<Vec<DomainIncome>>;

    /// Overwrite an existing income.
    /// Returns false if no income has the given ID.
    async fn update_income(&self, income: &DomainIncome) -> Result<bool>;

    /// Returns true if the income was found and deleted
    async fn delete_income(&self, income_id: &str) -> Result<bool>;
}

/// Trait defining the interface for expense storage operations
#[async_trait]
pub trait ExpenseStorage: Send + Sync {
    async fn store_expense(&self, expense: &DomainExpense) -> Result<()>;

    async fn get_expense(&self, expense_id: &str) -> Result<Option<DomainExpense>>;

    /// List all expenses in insertion order
    async fn list_expenses(&self) -> Result<Vec<DomainExpense>>;

    async fn update_expense(&self, expense: &DomainExpense) -> Result<bool>;

    async fn delete_expense(&self, expense_id: &str) -> Result<bool>;
}

/// Trait defining the interface for budget storage operations
#[async_trait]
pub trait BudgetStorage: Send + Sync {
    async fn store_budget(&self, budget: &DomainBudget) -> Result<()>;

    async fn get_budget(&self, budget_id: &str) -> Result<Option<DomainBudget>>;

    /// List all budgets in insertion order
    async fn list_budgets(&self) -> Result<Vec<DomainBudget>>;

    async fn update_budget(&self, budget: &DomainBudget) -> Result<bool>;

    async fn delete_budget(&self, budget_id: &str) -> Result<bool>;
}

/// Trait defining the interface for storage connections
///
/// This trait abstracts away the specific connection type and provides
/// factory methods for creating repositories, so the domain layer works
/// with any storage backend without knowing the implementation details.
pub trait Connection: Send + Sync + Clone + 'static {
    type UserRepository: UserStorage + Clone + 'static;
    type IncomeRepository: IncomeStorage + Clone + 'static;
    type ExpenseRepository: ExpenseStorage + Clone + 'static;
    type BudgetRepository: BudgetStorage + Clone + 'static;

    fn create_user_repository(&self) -> Self::UserRepository;
    fn create_income_repository(&self) -> Self::IncomeRepository;
    fn create_expense_repository(&self) -> Self::ExpenseRepository;
    fn create_budget_repository(&self) -> Self::BudgetRepository;
}
