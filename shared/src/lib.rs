//! Types shared between the finance tracker backend and the yew frontend.
//!
//! Everything that crosses the wire lives here, together with the pieces of
//! logic both sides must agree on: the field catalog and validation rules,
//! the aggregation engine behind charts and budget suggestions, and the
//! tabular report builder used for exports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod aggregation;
pub mod fields;
pub mod report;
pub mod resource;
pub mod validation;

pub use aggregation::{BudgetCheck, Entry, GroupTotal, MonthKey, MonthlyTotal, Summary};
pub use fields::{FieldKind, FieldSpec, Requirement};
pub use report::{ReportPage, TabularReport};
pub use resource::{BudgetResource, EntryResource, ExpenseResource, IncomeResource};
pub use validation::{
    Draft, FieldError, FieldSource, FieldValue, Operation, ValidationReport, ValidationScope,
};

/// An income entry as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: String,
    /// Where the money came from (Product Sales, Royalties, ...)
    pub income_source: String,
    pub description: String,
    pub income_category: String,
    /// Recurrence of the income (one-time, Weekly, ...)
    pub income_type: String,
    pub amount: f64,
    pub date: NaiveDate,
    /// Contact number, exactly 10 digits
    pub phone: String,
}

/// An expense entry as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    /// Payee name
    pub name: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub responsible_person: String,
    pub notes: String,
    pub phone: String,
}

/// A budget plan entry as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub amount: f64,
    pub category: String,
    pub notes: String,
    pub start_date: NaiveDate,
    pub responsible_person: String,
    pub phone: String,
}

/// Body of `POST /api/incomes` and `PUT /api/incomes/:id`.
///
/// Every field is optional on the wire so that a missing field surfaces as a
/// validation message instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeRequest {
    pub income_source: Option<String>,
    pub description: Option<String>,
    pub income_category: Option<String>,
    pub income_type: Option<String>,
    pub amount: Option<f64>,
    /// Calendar date, `YYYY-MM-DD` (an RFC 3339 timestamp is also accepted)
    pub date: Option<String>,
    pub phone: Option<String>,
}

/// Body of `POST /api/expenses` and `PUT /api/expenses/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub responsible_person: Option<String>,
    pub notes: Option<String>,
    pub phone: Option<String>,
}

/// Body of `POST /api/budgets` and `PUT /api/budgets/:id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetRequest {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub start_date: Option<String>,
    pub responsible_person: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login: a bearer token valid for one hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_id: String,
    pub message: String,
}

/// Public view of a registered user (never carries the password hash)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Plain `{message}` body used for confirmations and every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A log line forwarded from the browser to `POST /api/logs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_uses_camel_case_wire_names() {
        let income = Income {
            id: "abc".to_string(),
            income_source: "Royalties".to_string(),
            description: "Book sales".to_string(),
            income_category: "business".to_string(),
            income_type: "Monthly".to_string(),
            amount: 120.5,
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            phone: "0771234567".to_string(),
        };

        let json = serde_json::to_value(&income).unwrap();
        assert_eq!(json["incomeSource"], "Royalties");
        assert_eq!(json["incomeCategory"], "business");
        assert_eq!(json["date"], "2024-03-09");
    }

    #[test]
    fn test_request_with_missing_fields_deserializes() {
        let request: IncomeRequest =
            serde_json::from_str(r#"{"incomeSource":"Other","amount":10}"#).unwrap();

        assert_eq!(request.income_source.as_deref(), Some("Other"));
        assert_eq!(request.amount, Some(10.0));
        assert!(request.phone.is_none());
        assert!(request.date.is_none());
    }

    #[test]
    fn test_budget_request_start_date_wire_name() {
        let request: BudgetRequest =
            serde_json::from_str(r#"{"startDate":"2024-01-01","responsiblePerson":"Ann"}"#)
                .unwrap();

        assert_eq!(request.start_date.as_deref(), Some("2024-01-01"));
        assert_eq!(request.responsible_person.as_deref(), Some("Ann"));
    }

    #[test]
    fn test_login_response_user_id_wire_name() {
        let response = LoginResponse {
            token: "t".to_string(),
            user_id: "u1".to_string(),
            message: "Login successful".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["userId"], "u1");
    }
}
