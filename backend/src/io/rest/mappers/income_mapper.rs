use shared::Income;

use crate::domain::models::income::DomainIncome;

pub struct IncomeMapper;

impl IncomeMapper {
    /// Convert domain DomainIncome to shared Income DTO
    pub fn to_dto(domain: DomainIncome) -> Income {
        Income::from(domain)
    }

    pub fn to_dto_list(domain_incomes: Vec<DomainIncome>) -> Vec<Income> {
        domain_incomes.into_iter().map(Self::to_dto).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_income_mapping_preserves_fields() {
        let domain = DomainIncome {
            id: "i1".to_string(),
            income_source: "Investments".to_string(),
            description: "Bond coupon".to_string(),
            income_category: "investment".to_string(),
            income_type: "Annually".to_string(),
            amount: 3000.0,
            date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            phone: "0771234567".to_string(),
        };

        let dto = IncomeMapper::to_dto(domain.clone());
        assert_eq!(dto.id, domain.id);
        assert_eq!(dto.income_type, "Annually");
        assert_eq!(dto.date, domain.date);
        assert_eq!(dto.amount, 3000.0);
    }
}
