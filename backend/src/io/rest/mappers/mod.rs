pub mod budget_mapper;
pub mod expense_mapper;
pub mod income_mapper;
pub mod user_mapper;

pub use budget_mapper::BudgetMapper;
pub use expense_mapper::ExpenseMapper;
pub use income_mapper::IncomeMapper;
pub use user_mapper::UserMapper;
