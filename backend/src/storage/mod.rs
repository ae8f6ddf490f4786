//! # Storage Module
//!
//! Handles all data persistence for the finance tracker.
//!
//! The domain layer only sees the traits in [`traits`]; the SQLite
//! implementation in [`sqlite`] provides one repository per table
//! (`users`, `incomes`, `expenses`, `budgets`) over a shared connection pool.
//!
//! ## Storage Notes
//!
//! - Dates are stored as `YYYY-MM-DD` text and parsed back into calendar dates
//! - IDs are UUID v4 strings assigned by the domain layer
//! - Each operation touches a single row, so no explicit transactions are used

pub mod sqlite;
pub mod traits;

pub use sqlite::{BudgetRepository, DbConnection, ExpenseRepository, IncomeRepository, UserRepository};
pub use traits::{BudgetStorage, Connection, ExpenseStorage, IncomeStorage, UserStorage};
