use shared::Budget;

use crate::domain::models::budget::DomainBudget;

pub struct BudgetMapper;

impl BudgetMapper {
    pub fn to_dto(domain: DomainBudget) -> Budget {
        Budget::from(domain)
    }

    pub fn to_dto_list(domain_budgets: Vec<DomainBudget>) -> Vec<Budget> {
        domain_budgets.into_iter().map(Self::to_dto).collect()
    }
}
