use shared::Expense;

use crate::domain::models::expense::DomainExpense;

pub struct ExpenseMapper;

impl ExpenseMapper {
    pub fn to_dto(domain: DomainExpense) -> Expense {
        Expense::from(domain)
    }

    pub fn to_dto_list(domain_expenses: Vec<DomainExpense>) -> Vec<Expense> {
        domain_expenses.into_iter().map(Self::to_dto).collect()
    }
}
