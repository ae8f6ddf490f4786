//! # Validation Rule Set
//!
//! One set of rules checks every income, expense and budget payload, whether
//! it comes from a form draft in the browser or a JSON request on the server.
//! Rules are driven by the field catalogs in [`crate::fields`].
//!
//! ## Scopes
//!
//! - [`ValidationScope::Server`] checks presence, amount positivity, phone
//!   format and date parsing. These are the rules the REST layer enforces.
//! - [`ValidationScope::Form`] adds the input restrictions the dashboard
//!   forms apply before submitting: closed-set membership, letters-only text,
//!   whole-number amounts and start dates that are not in the future.
//!
//! Fields are checked in catalog order and each field reports at most one
//! error, so the first error of a report is stable for a given payload.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::fields::{FieldKind, FieldSpec, Requirement};

pub const AMOUNT_MESSAGE: &str = "Amount must be a positive number";
pub const PHONE_MESSAGE: &str = "Phone number must be exactly 10 digits and contain only numbers";
pub const WHOLE_AMOUNT_MESSAGE: &str = "Amount must be a whole number";

/// A raw value pulled out of a request or a form draft
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Missing,
    Text(&'a str),
    Number(f64),
}

/// Anything that can hand out raw field values by wire name
pub trait FieldSource {
    fn value(&self, name: &str) -> FieldValue<'_>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationScope {
    Server,
    /// Form rules need the current date for not-future checks
    Form { today: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message of the first failing field in catalog order
    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Collapse into the first message, as the REST layer reports it
    pub fn into_result(self) -> Result<(), String> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error.message),
            None => Ok(()),
        }
    }
}

/// Validate `source` against a field catalog.
///
/// Non-editable fields are skipped on update; optional fields are only
/// checked when a value is present.
pub fn validate<S: FieldSource + ?Sized>(
    fields: &[FieldSpec],
    source: &S,
    operation: Operation,
    scope: ValidationScope,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    for spec in fields {
        if operation == Operation::Update && !spec.editable {
            continue;
        }

        let value = source.value(spec.name);
        if is_blank(&value) {
            if is_required(spec.requirement, operation) {
                report.errors.push(FieldError {
                    field: spec.name,
                    message: format!("{} is required", spec.label),
                });
            }
            continue;
        }

        if let Err(message) = check_value(spec, value, scope) {
            report.errors.push(FieldError {
                field: spec.name,
                message,
            });
        }
    }

    report
}

fn is_required(requirement: Requirement, operation: Operation) -> bool {
    match requirement {
        Requirement::Always => true,
        Requirement::OnCreate => operation == Operation::Create,
        Requirement::Optional => false,
    }
}

fn is_blank(value: &FieldValue<'_>) -> bool {
    match value {
        FieldValue::Missing => true,
        FieldValue::Text(text) => text.trim().is_empty(),
        FieldValue::Number(_) => false,
    }
}

fn check_value(spec: &FieldSpec, value: FieldValue<'_>, scope: ValidationScope) -> Result<(), String> {
    let form_today = match scope {
        ValidationScope::Form { today } => Some(today),
        ValidationScope::Server => None,
    };

    match spec.kind {
        FieldKind::Amount { whole } => {
            let amount = match value {
                FieldValue::Number(n) => Some(n),
                FieldValue::Text(text) => parse_amount(text),
                FieldValue::Missing => None,
            };
            let amount = match amount {
                Some(n) if n.is_finite() && n > 0.0 => n,
                _ => return Err(AMOUNT_MESSAGE.to_string()),
            };
            if whole && form_today.is_some() && amount.fract() != 0.0 {
                return Err(WHOLE_AMOUNT_MESSAGE.to_string());
            }
            Ok(())
        }
        FieldKind::Phone => {
            let text = text_of(value);
            if is_valid_phone(text.trim()) {
                Ok(())
            } else {
                Err(PHONE_MESSAGE.to_string())
            }
        }
        FieldKind::Date { not_future } => {
            let text = text_of(value);
            let date = parse_date(&text).ok_or_else(|| format!("{} must be a valid date", spec.label))?;
            if let Some(today) = form_today {
                if not_future && date > today {
                    return Err(format!("{} cannot be in the future", spec.label));
                }
            }
            Ok(())
        }
        FieldKind::Letters => {
            if form_today.is_some() && !is_letters(&text_of(value)) {
                return Err(format!("{} must contain only letters and spaces", spec.label));
            }
            Ok(())
        }
        FieldKind::Choice(options) => {
            if form_today.is_some() && !options.contains(&text_of(value).trim()) {
                return Err(format!("{} must be one of the listed options", spec.label));
            }
            Ok(())
        }
        FieldKind::Text | FieldKind::LongText => Ok(()),
    }
}

fn text_of(value: FieldValue<'_>) -> String {
    match value {
        FieldValue::Text(text) => text.to_string(),
        FieldValue::Number(n) => n.to_string(),
        FieldValue::Missing => String::new(),
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
}

fn is_letters(text: &str) -> bool {
    text.chars().all(|c| c.is_alphabetic() || c == ' ')
}

/// Parse a typed amount, tolerating a currency prefix, commas and spaces
pub fn parse_amount(input: &str) -> Option<f64> {
    let cleaned = input
        .trim()
        .trim_start_matches("Rs.")
        .trim_start_matches("Rs")
        .replace(',', "")
        .replace(' ', "");

    cleaned.parse::<f64>().ok()
}

/// Parse a calendar date from `YYYY-MM-DD` or the date part of an RFC 3339 timestamp
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let date_part = input.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Form-side payload: wire field name to the raw text the user typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    values: BTreeMap<String, String>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Trimmed value, or `None` when the field is blank
    pub fn text(&self, name: &str) -> Option<String> {
        let value = self.get(name).trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    pub fn amount(&self, name: &str) -> Option<f64> {
        parse_amount(self.get(name))
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl FieldSource for Draft {
    fn value(&self, name: &str) -> FieldValue<'_> {
        match self.values.get(name) {
            Some(value) => FieldValue::Text(value),
            None => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{BUDGET_FIELDS, EXPENSE_FIELDS, INCOME_FIELDS};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn income_draft() -> Draft {
        Draft::new()
            .with("incomeSource", "Royalties")
            .with("incomeType", "Monthly")
            .with("incomeCategory", "business")
            .with("amount", "1500")
            .with("date", "2024-06-01")
            .with("phone", "0771234567")
            .with("description", "Book royalties")
    }

    #[test]
    fn test_complete_income_passes_both_scopes() {
        let draft = income_draft();

        assert!(validate(INCOME_FIELDS, &draft, Operation::Create, ValidationScope::Server).is_valid());
        assert!(validate(
            INCOME_FIELDS,
            &draft,
            Operation::Create,
            ValidationScope::Form { today: today() }
        )
        .is_valid());
    }

    #[test]
    fn test_missing_field_reports_label() {
        let draft = income_draft().with("incomeSource", "   ");
        let report = validate(INCOME_FIELDS, &draft, Operation::Create, ValidationScope::Server);

        assert_eq!(report.first_message(), Some("Income Source is required"));
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        for amount in ["0", "-5", "abc"] {
            let draft = income_draft().with("amount", amount);
            let report = validate(INCOME_FIELDS, &draft, Operation::Create, ValidationScope::Server);
            assert_eq!(report.message_for("amount"), Some(AMOUNT_MESSAGE), "amount {}", amount);
        }
    }

    #[test]
    fn test_phone_must_be_ten_digits() {
        for phone in ["077123456", "07712345678", "07712a4567"] {
            let draft = income_draft().with("phone", phone);
            let report = validate(INCOME_FIELDS, &draft, Operation::Create, ValidationScope::Server);
            assert_eq!(report.first_message(), Some(PHONE_MESSAGE), "phone {}", phone);
        }
    }

    #[test]
    fn test_income_update_skips_date_and_description() {
        let mut draft = income_draft();
        draft.set("date", "");
        draft.set("description", "");

        let report = validate(INCOME_FIELDS, &draft, Operation::Update, ValidationScope::Server);
        assert!(report.is_valid());

        let report = validate(INCOME_FIELDS, &draft, Operation::Create, ValidationScope::Server);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_closed_sets_only_checked_in_form_scope() {
        let draft = Draft::new()
            .with("amount", "500")
            .with("category", "Travel")
            .with("startDate", "2024-06-01")
            .with("phone", "0771234567");

        let server = validate(BUDGET_FIELDS, &draft, Operation::Create, ValidationScope::Server);
        assert!(server.is_valid());

        let form = validate(
            BUDGET_FIELDS,
            &draft,
            Operation::Create,
            ValidationScope::Form { today: today() },
        );
        assert_eq!(form.first_message(), Some("Category must be one of the listed options"));
    }

    #[test]
    fn test_budget_form_rules() {
        let draft = Draft::new()
            .with("amount", "500.5")
            .with("category", "Financial")
            .with("notes", "Q3 plan 2")
            .with("startDate", "2024-07-01")
            .with("phone", "0771234567");

        let report = validate(
            BUDGET_FIELDS,
            &draft,
            Operation::Create,
            ValidationScope::Form { today: today() },
        );

        assert_eq!(report.message_for("amount"), Some(WHOLE_AMOUNT_MESSAGE));
        assert_eq!(report.message_for("notes"), Some("Notes must contain only letters and spaces"));
        assert_eq!(report.message_for("startDate"), Some("Start Date cannot be in the future"));
        assert_eq!(report.errors.len(), 3);
    }

    #[test]
    fn test_optional_fields_may_be_blank() {
        let draft = Draft::new()
            .with("name", "Office Depot")
            .with("description", "Printer paper")
            .with("category", "Administrative")
            .with("amount", "42.50")
            .with("date", "2024-05-02")
            .with("phone", "0112345678");

        let report = validate(
            EXPENSE_FIELDS,
            &draft,
            Operation::Create,
            ValidationScope::Form { today: today() },
        );
        assert!(report.is_valid(), "{:?}", report);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let draft = income_draft().with("date", "2024-13-45");
        let report = validate(INCOME_FIELDS, &draft, Operation::Create, ValidationScope::Server);

        assert_eq!(report.first_message(), Some("Date must be a valid date"));
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_amount("Rs 1,250.50"), Some(1250.5));
        assert_eq!(parse_amount("ten"), None);
        assert_eq!(
            parse_date("2024-03-09T10:30:00.000Z"),
            NaiveDate::from_ymd_opt(2024, 3, 9)
        );
        assert_eq!(parse_date("09/03/2024"), None);
    }
}
