//! Field catalogs for income, expense and budget entries.
//!
//! A catalog lists every user-editable field of an entry in display order,
//! with the kind of input it takes and when it is required. The backend
//! validates requests against these catalogs and the frontend renders its
//! forms and inline editors from them, so the two sides cannot drift apart.

pub const INCOME_SOURCES: &[&str] = &[
    "Product Sales",
    "Service Revenue",
    "Investments",
    "Rental Income",
    "Royalties",
    "Other",
];

pub const INCOME_TYPES: &[&str] = &["one-time", "Weekly", "Monthly", "Annually"];

pub const INCOME_CATEGORIES: &[&str] = &["salary", "freelance", "investment", "business", "other"];

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Administrative",
    "Research & Development",
    "Sales and Distribution",
    "IT and Software",
    "Entertainment and Hospitality",
];

pub const BUDGET_CATEGORIES: &[&str] = &[
    "Administrative",
    "Financial",
    "Research & Development",
    "Sales and Distribution",
    "IT and Software",
    "Entertainment and Hospitality",
];

/// What kind of value a field holds
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Free single-line text
    Text,
    /// Free multi-line text
    LongText,
    /// Letters and spaces only
    Letters,
    /// Positive number; `whole` restricts form input to integers
    Amount { whole: bool },
    /// Exactly ten digits
    Phone,
    /// Calendar date; `not_future` caps form input at today
    Date { not_future: bool },
    /// One of a closed set of values
    Choice(&'static [&'static str]),
}

/// When a field must carry a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Always,
    OnCreate,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Wire name (camelCase), also the key used in form drafts
    pub name: &'static str,
    /// Human label used in forms and messages
    pub label: &'static str,
    pub kind: FieldKind,
    pub requirement: Requirement,
    /// Whether updates may change the field
    pub editable: bool,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            requirement: Requirement::Always,
            editable: true,
        }
    }

    const fn optional(mut self) -> Self {
        self.requirement = Requirement::Optional;
        self
    }

    const fn on_create(mut self) -> Self {
        self.requirement = Requirement::OnCreate;
        self
    }

    const fn fixed(mut self) -> Self {
        self.editable = false;
        self
    }

    /// Closed set of values for choice fields
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match self.kind {
            FieldKind::Choice(options) => Some(options),
            _ => None,
        }
    }
}

pub const INCOME_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("incomeSource", "Income Source", FieldKind::Choice(INCOME_SOURCES)),
    FieldSpec::new("incomeType", "Income Type", FieldKind::Choice(INCOME_TYPES)),
    FieldSpec::new("incomeCategory", "Income Category", FieldKind::Choice(INCOME_CATEGORIES)),
    FieldSpec::new("amount", "Amount", FieldKind::Amount { whole: false }),
    FieldSpec::new("date", "Date", FieldKind::Date { not_future: false }).fixed(),
    FieldSpec::new("phone", "Phone", FieldKind::Phone),
    FieldSpec::new("description", "Description", FieldKind::LongText).on_create(),
];

pub const EXPENSE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Letters),
    FieldSpec::new("description", "Description", FieldKind::Text),
    FieldSpec::new("category", "Category", FieldKind::Choice(EXPENSE_CATEGORIES)),
    FieldSpec::new("amount", "Amount", FieldKind::Amount { whole: false }),
    FieldSpec::new("date", "Date", FieldKind::Date { not_future: false }),
    FieldSpec::new("responsiblePerson", "Responsible Person", FieldKind::Letters).optional(),
    FieldSpec::new("notes", "Notes", FieldKind::LongText).optional(),
    FieldSpec::new("phone", "Phone", FieldKind::Phone),
];

pub const BUDGET_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("amount", "Amount", FieldKind::Amount { whole: true }),
    FieldSpec::new("category", "Category", FieldKind::Choice(BUDGET_CATEGORIES)),
    FieldSpec::new("notes", "Notes", FieldKind::Letters).optional(),
    FieldSpec::new("startDate", "Start Date", FieldKind::Date { not_future: true }),
    FieldSpec::new("responsiblePerson", "Responsible Person", FieldKind::Letters).optional(),
    FieldSpec::new("phone", "Phone", FieldKind::Phone),
];

/// Look up a field by wire name
pub fn find_field(fields: &'static [FieldSpec], name: &str) -> Option<&'static FieldSpec> {
    fields.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_are_unique_per_catalog() {
        for catalog in [INCOME_FIELDS, EXPENSE_FIELDS, BUDGET_FIELDS] {
            let mut names: Vec<&str> = catalog.iter().map(|f| f.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), catalog.len());
        }
    }

    #[test]
    fn test_income_date_is_not_editable() {
        let date = find_field(INCOME_FIELDS, "date").unwrap();
        assert!(!date.editable);

        let description = find_field(INCOME_FIELDS, "description").unwrap();
        assert_eq!(description.requirement, Requirement::OnCreate);
    }

    #[test]
    fn test_choice_fields_expose_options() {
        let category = find_field(BUDGET_FIELDS, "category").unwrap();
        assert_eq!(category.options(), Some(BUDGET_CATEGORIES));
        assert!(find_field(BUDGET_FIELDS, "phone").unwrap().options().is_none());
    }
}
