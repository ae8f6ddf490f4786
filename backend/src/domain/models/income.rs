use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::Income;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomainIncome {
    pub id: String,
    pub income_source: String,
    pub description: String,
    pub income_category: String,
    pub income_type: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub phone: String,
}

/// Fields an income update may change; the date is fixed at creation
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeChanges {
    pub income_source: String,
    /// `None` keeps the stored description
    pub description: Option<String>,
    pub income_category: String,
    pub income_type: String,
    pub amount: f64,
    pub phone: String,
}

impl DomainIncome {
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    pub fn apply(&mut self, changes: IncomeChanges) {
        self.income_source = changes.income_source;
        if let Some(description) = changes.description {
            self.description = description;
        }
        self.income_category = changes.income_category;
        self.income_type = changes.income_type;
        self.amount = changes.amount;
        self.phone = changes.phone;
    }
}

impl From<DomainIncome> for Income {
    fn from(domain: DomainIncome) -> Self {
        Self {
            id: domain.id,
            income_source: domain.income_source,
            description: domain.description,
            income_category: domain.income_category,
            income_type: domain.income_type,
            amount: domain.amount,
            date: domain.date,
            phone: domain.phone,
        }
    }
}
