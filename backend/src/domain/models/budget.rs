use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::Budget;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomainBudget {
    pub id: String,
    pub amount: f64,
    pub category: String,
    pub notes: String,
    pub start_date: NaiveDate,
    pub responsible_person: String,
    pub phone: String,
}

impl DomainBudget {
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

impl From<DomainBudget> for Budget {
    fn from(domain: DomainBudget) -> Self {
        Self {
            id: domain.id,
            amount: domain.amount,
            category: domain.category,
            notes: domain.notes,
            start_date: domain.start_date,
            responsible_person: domain.responsible_person,
            phone: domain.phone,
        }
    }
}
