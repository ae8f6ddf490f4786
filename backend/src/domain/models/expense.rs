use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::Expense;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomainExpense {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub responsible_person: String,
    pub notes: String,
    pub phone: String,
}

impl DomainExpense {
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

impl From<DomainExpense> for Expense {
    fn from(domain: DomainExpense) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            description: domain.description,
            category: domain.category,
            amount: domain.amount,
            date: domain.date,
            responsible_person: domain.responsible_person,
            notes: domain.notes,
            phone: domain.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_dto_keeps_every_field() {
        let domain = DomainExpense {
            id: "e-1".to_string(),
            name: "Stationers".to_string(),
            description: "Printer paper".to_string(),
            category: "Administrative".to_string(),
            amount: 1250.0,
            date: NaiveDate::from_ymd_opt(2024, 2, 9).unwrap(),
            responsible_person: "Ann".to_string(),
            notes: "Paid in cash".to_string(),
            phone: "0771234567".to_string(),
        };

        let dto = Expense::from(domain.clone());

        assert_eq!(dto.id, domain.id);
        assert_eq!(dto.name, domain.name);
        assert_eq!(dto.amount, domain.amount);
        assert_eq!(dto.date, domain.date);
        assert_eq!(dto.responsible_person, domain.responsible_person);
        assert_eq!(dto.notes, domain.notes);
        assert_eq!(dto.phone, domain.phone);
    }
}
