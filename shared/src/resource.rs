//! Per-resource glue between entries, requests, field catalogs and reports.
//!
//! The frontend hooks and components are generic over [`EntryResource`], so
//! incomes, expenses and budgets share one form, one inline-edit table and
//! one data hook.

use serde::{de::DeserializeOwned, Serialize};

use crate::aggregation::Entry;
use crate::fields::{FieldSpec, BUDGET_FIELDS, EXPENSE_FIELDS, INCOME_FIELDS};
use crate::report::format_amount;
use crate::validation::{Draft, FieldSource, FieldValue};
use crate::{Budget, BudgetRequest, Expense, ExpenseRequest, Income, IncomeRequest};

pub trait EntryResource: 'static {
    type Entry: Entry + Clone + PartialEq + Serialize + DeserializeOwned + 'static;
    type Request: FieldSource + Clone + Default + PartialEq + Serialize + DeserializeOwned + 'static;

    /// Path segment under `/api`
    const COLLECTION: &'static str;
    /// Singular display name
    const TITLE: &'static str;

    fn fields() -> &'static [FieldSpec];
    fn id(entry: &Self::Entry) -> &str;
    /// Seed a form draft from an existing entry, for inline editing
    fn draft_from(entry: &Self::Entry) -> Draft;
    fn request_from(draft: &Draft) -> Self::Request;
    fn report_columns() -> &'static [&'static str];
    fn report_row(entry: &Self::Entry) -> Vec<String>;
}

fn text_value(value: &Option<String>) -> FieldValue<'_> {
    match value {
        Some(text) => FieldValue::Text(text),
        None => FieldValue::Missing,
    }
}

fn number_value(value: Option<f64>) -> FieldValue<'static> {
    match value {
        Some(n) => FieldValue::Number(n),
        None => FieldValue::Missing,
    }
}

impl FieldSource for IncomeRequest {
    fn value(&self, name: &str) -> FieldValue<'_> {
        match name {
            "incomeSource" => text_value(&self.income_source),
            "description" => text_value(&self.description),
            "incomeCategory" => text_value(&self.income_category),
            "incomeType" => text_value(&self.income_type),
            "amount" => number_value(self.amount),
            "date" => text_value(&self.date),
            "phone" => text_value(&self.phone),
            _ => FieldValue::Missing,
        }
    }
}

impl FieldSource for ExpenseRequest {
    fn value(&self, name: &str) -> FieldValue<'_> {
        match name {
            "name" => text_value(&self.name),
            "description" => text_value(&self.description),
            "category" => text_value(&self.category),
            "amount" => number_value(self.amount),
            "date" => text_value(&self.date),
            "responsiblePerson" => text_value(&self.responsible_person),
            "notes" => text_value(&self.notes),
            "phone" => text_value(&self.phone),
            _ => FieldValue::Missing,
        }
    }
}

impl FieldSource for BudgetRequest {
    fn value(&self, name: &str) -> FieldValue<'_> {
        match name {
            "amount" => number_value(self.amount),
            "category" => text_value(&self.category),
            "notes" => text_value(&self.notes),
            "startDate" => text_value(&self.start_date),
            "responsiblePerson" => text_value(&self.responsible_person),
            "phone" => text_value(&self.phone),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomeResource;

impl EntryResource for IncomeResource {
    type Entry = Income;
    type Request = IncomeRequest;

    const COLLECTION: &'static str = "incomes";
    const TITLE: &'static str = "Income";

    fn fields() -> &'static [FieldSpec] {
        INCOME_FIELDS
    }

    fn id(entry: &Income) -> &str {
        &entry.id
    }

    fn draft_from(entry: &Income) -> Draft {
        Draft::new()
            .with("incomeSource", entry.income_source.as_str())
            .with("description", entry.description.as_str())
            .with("incomeCategory", entry.income_category.as_str())
            .with("incomeType", entry.income_type.as_str())
            .with("amount", entry.amount.to_string())
            .with("date", entry.date.to_string())
            .with("phone", entry.phone.as_str())
    }

    fn request_from(draft: &Draft) -> IncomeRequest {
        IncomeRequest {
            income_source: draft.text("incomeSource"),
            description: draft.text("description"),
            income_category: draft.text("incomeCategory"),
            income_type: draft.text("incomeType"),
            amount: draft.amount("amount"),
            date: draft.text("date"),
            phone: draft.text("phone"),
        }
    }

    fn report_columns() -> &'static [&'static str] {
        &["Income Source", "Category", "Type", "Amount", "Description", "Date"]
    }

    fn report_row(entry: &Income) -> Vec<String> {
        vec![
            entry.income_source.clone(),
            entry.income_category.clone(),
            entry.income_type.clone(),
            format_amount(entry.amount),
            entry.description.clone(),
            entry.date.to_string(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseResource;

impl EntryResource for ExpenseResource {
    type Entry = Expense;
    type Request = ExpenseRequest;

    const COLLECTION: &'static str = "expenses";
    const TITLE: &'static str = "Expense";

    fn fields() -> &'static [FieldSpec] {
        EXPENSE_FIELDS
    }

    fn id(entry: &Expense) -> &str {
        &entry.id
    }

    fn draft_from(entry: &Expense) -> Draft {
        Draft::new()
            .with("name", entry.name.as_str())
            .with("description", entry.description.as_str())
            .with("category", entry.category.as_str())
            .with("amount", entry.amount.to_string())
            .with("date", entry.date.to_string())
            .with("responsiblePerson", entry.responsible_person.as_str())
            .with("notes", entry.notes.as_str())
            .with("phone", entry.phone.as_str())
    }

    fn request_from(draft: &Draft) -> ExpenseRequest {
        ExpenseRequest {
            name: draft.text("name"),
            description: draft.text("description"),
            category: draft.text("category"),
            amount: draft.amount("amount"),
            date: draft.text("date"),
            responsible_person: draft.text("responsiblePerson"),
            notes: draft.text("notes"),
            phone: draft.text("phone"),
        }
    }

    fn report_columns() -> &'static [&'static str] {
        &[
            "Name",
            "Description",
            "Category",
            "Amount",
            "Date",
            "Responsible Person",
            "Notes",
            "Phone",
        ]
    }

    fn report_row(entry: &Expense) -> Vec<String> {
        vec![
            entry.name.clone(),
            entry.description.clone(),
            entry.category.clone(),
            format_amount(entry.amount),
            entry.date.to_string(),
            entry.responsible_person.clone(),
            entry.notes.clone(),
            entry.phone.clone(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetResource;

impl EntryResource for BudgetResource {
    type Entry = Budget;
    type Request = BudgetRequest;

    const COLLECTION: &'static str = "budgets";
    const TITLE: &'static str = "Budget";

    fn fields() -> &'static [FieldSpec] {
        BUDGET_FIELDS
    }

    fn id(entry: &Budget) -> &str {
        &entry.id
    }

    fn draft_from(entry: &Budget) -> Draft {
        Draft::new()
            .with("amount", entry.amount.to_string())
            .with("category", entry.category.as_str())
            .with("notes", entry.notes.as_str())
            .with("startDate", entry.start_date.to_string())
            .with("responsiblePerson", entry.responsible_person.as_str())
            .with("phone", entry.phone.as_str())
    }

    fn request_from(draft: &Draft) -> BudgetRequest {
        BudgetRequest {
            amount: draft.amount("amount"),
            category: draft.text("category"),
            notes: draft.text("notes"),
            start_date: draft.text("startDate"),
            responsible_person: draft.text("responsiblePerson"),
            phone: draft.text("phone"),
        }
    }

    fn report_columns() -> &'static [&'static str] {
        &["Category", "Amount", "Start Date", "Responsible Person", "Notes", "Phone"]
    }

    fn report_row(entry: &Budget) -> Vec<String> {
        vec![
            entry.category.clone(),
            format_amount(entry.amount),
            entry.start_date.to_string(),
            entry.responsible_person.clone(),
            entry.notes.clone(),
            entry.phone.clone(),
        ]
    }
}
