pub mod budget_repository;
pub mod expense_repository;
pub mod income_repository;
pub mod user_repository;

pub use budget_repository::BudgetRepository;
pub use expense_repository::ExpenseRepository;
pub use income_repository::IncomeRepository;
pub use user_repository::UserRepository;
