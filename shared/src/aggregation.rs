//! # Aggregation Engine
//!
//! Pure functions over slices of entries that feed the dashboard charts, the
//! analyzed reports and the budget suggestion. Nothing here touches storage
//! or the network; the same functions run in the browser and in tests.
//!
//! Month buckets are keyed by numeric `(year, month)` so they sort
//! chronologically. Display labels such as `"Jan 2024"` are produced from the
//! key and never parsed back.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::{Budget, Expense, Income};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A dated monetary record that can be aggregated
pub trait Entry {
    fn amount(&self) -> f64;
    fn date(&self) -> NaiveDate;
    /// Every value a free-text search should look at
    fn search_fields(&self) -> Vec<String>;
}

impl Entry for Income {
    fn amount(&self) -> f64 {
        self.amount
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.income_source.clone(),
            self.description.clone(),
            self.income_category.clone(),
            self.income_type.clone(),
            self.amount.to_string(),
            self.date.to_string(),
            self.phone.clone(),
        ]
    }
}

impl Entry for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.description.clone(),
            self.category.clone(),
            self.amount.to_string(),
            self.date.to_string(),
            self.responsible_person.clone(),
            self.notes.clone(),
            self.phone.clone(),
        ]
    }
}

impl Entry for Budget {
    fn amount(&self) -> f64 {
        self.amount
    }

    fn date(&self) -> NaiveDate {
        self.start_date
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.category.clone(),
            self.notes.clone(),
            self.amount.to_string(),
            self.start_date.to_string(),
            self.responsible_person.clone(),
            self.phone.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub key: String,
    pub total: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The calendar month before this one; January rolls back to December
    pub fn previous(&self) -> Self {
        if self.month <= 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Display label, e.g. `Jan 2024`
    pub fn label(&self) -> String {
        let index = (self.month.clamp(1, 12) - 1) as usize;
        format!("{} {}", MONTH_NAMES[index], self.year)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    pub month: MonthKey,
    pub total: f64,
}

/// Case-insensitive substring match against any field; an empty term matches everything
pub fn matches_search<E: Entry>(entry: &E, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    entry
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

pub fn filter_entries<'a, E: Entry>(entries: &'a [E], term: &str) -> Vec<&'a E> {
    entries.iter().filter(|e| matches_search(*e, term)).collect()
}

pub fn total<'a, E: Entry + 'a>(entries: impl IntoIterator<Item = &'a E>) -> f64 {
    entries.into_iter().map(Entry::amount).sum()
}

/// Sum amounts per categorical key, in first-seen order
pub fn group_sums<'a, E, F>(entries: impl IntoIterator<Item = &'a E>, key: F) -> Vec<GroupTotal>
where
    E: Entry + 'a,
    F: Fn(&E) -> &str,
{
    let mut groups: Vec<GroupTotal> = Vec::new();

    for entry in entries {
        let name = key(entry);
        match groups.iter_mut().find(|g| g.key == name) {
            Some(group) => {
                group.total += entry.amount();
                group.count += 1;
            }
            None => groups.push(GroupTotal {
                key: name.to_string(),
                total: entry.amount(),
                count: 1,
            }),
        }
    }

    groups
}

fn month_buckets<'a, E: Entry + 'a>(entries: impl IntoIterator<Item = &'a E>) -> BTreeMap<MonthKey, f64> {
    let mut buckets = BTreeMap::new();
    for entry in entries {
        *buckets.entry(MonthKey::of(entry.date())).or_insert(0.0) += entry.amount();
    }
    buckets
}

/// Per-month totals in chronological order
pub fn monthly_trend<'a, E: Entry + 'a>(entries: impl IntoIterator<Item = &'a E>) -> Vec<MonthlyTotal> {
    month_buckets(entries)
        .into_iter()
        .map(|(month, total)| MonthlyTotal { month, total })
        .collect()
}

pub fn month_total<E: Entry>(entries: &[E], year: i32, month: u32) -> f64 {
    let key = MonthKey { year, month };
    total(entries.iter().filter(|e| MonthKey::of(e.date()) == key))
}

/// Per-month totals for every month except the one containing `today`
pub fn past_month_totals<E: Entry>(entries: &[E], today: NaiveDate) -> Vec<MonthlyTotal> {
    let current = MonthKey::of(today);
    monthly_trend(entries.iter().filter(|e| MonthKey::of(e.date()) != current))
}

/// Average monthly spend over the months before the current one.
///
/// Sums every amount outside the current calendar month and divides by the
/// number of distinct months those amounts fall in. Returns `0.0` when
/// there is no history.
pub fn trailing_average_suggestion<E: Entry>(entries: &[E], today: NaiveDate) -> f64 {
    let past = past_month_totals(entries, today);
    if past.is_empty() {
        return 0.0;
    }

    let sum: f64 = past.iter().map(|m| m.total).sum();
    sum / past.len() as f64
}

/// Total of the entries dated in the calendar month before `today`
pub fn previous_month_total<E: Entry>(entries: &[E], today: NaiveDate) -> f64 {
    let previous = MonthKey::of(today).previous();
    month_total(entries, previous.year, previous.month)
}

/// Last month's spending measured against last month's budgets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetCheck {
    pub month: MonthKey,
    pub expenses: f64,
    pub budget: f64,
}

impl BudgetCheck {
    /// Next month unlocks only when spending stayed at or under budget
    pub fn within_budget(&self) -> bool {
        self.expenses <= self.budget
    }
}

/// Compare the previous month's expense total with the budgets starting in that month
pub fn previous_month_check(expenses: &[Expense], budgets: &[Budget], today: NaiveDate) -> BudgetCheck {
    BudgetCheck {
        month: MonthKey::of(today).previous(),
        expenses: previous_month_total(expenses, today),
        budget: previous_month_total(budgets, today),
    }
}

/// Totals behind the analyzed report
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: f64,
    pub count: usize,
    pub monthly: Vec<MonthlyTotal>,
    /// Named breakdowns, e.g. ("By Type", per-type totals)
    pub groups: Vec<(String, Vec<GroupTotal>)>,
}

impl Summary {
    /// Add a named breakdown over the same entries
    pub fn with_group<E, F>(mut self, name: &str, entries: &[E], key: F) -> Self
    where
        E: Entry,
        F: Fn(&E) -> &str,
    {
        self.groups.push((name.to_string(), group_sums(entries, key)));
        self
    }
}

pub fn summarize<E: Entry>(entries: &[E]) -> Summary {
    Summary {
        total: total(entries),
        count: entries.len(),
        monthly: monthly_trend(entries),
        groups: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn income(income_type: &str, amount: f64, on: NaiveDate) -> Income {
        Income {
            id: format!("{}-{}", income_type, amount),
            income_source: "Royalties".to_string(),
            description: "Quarterly payout".to_string(),
            income_category: "business".to_string(),
            income_type: income_type.to_string(),
            amount,
            date: on,
            phone: "0771234567".to_string(),
        }
    }

    fn expense(amount: f64, on: NaiveDate) -> Expense {
        Expense {
            id: format!("e-{}", amount),
            name: "Vendor".to_string(),
            description: "Supplies".to_string(),
            category: "Administrative".to_string(),
            amount,
            date: on,
            responsible_person: "Ann".to_string(),
            notes: String::new(),
            phone: "0771234567".to_string(),
        }
    }

    #[test]
    fn test_group_sums_by_type() {
        let entries = vec![
            income("A", 100.0, date(2024, 1, 5)),
            income("B", 50.0, date(2024, 1, 6)),
            income("A", 25.0, date(2024, 2, 1)),
        ];

        let groups = group_sums(&entries, |i: &Income| i.income_type.as_str());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "A");
        assert_eq!(groups[0].total, 125.0);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[1].key, "B");
        assert_eq!(groups[1].total, 50.0);
        assert_eq!(total(&entries), 175.0);
    }

    #[test]
    fn test_group_sums_empty() {
        let entries: Vec<Income> = Vec::new();
        assert!(group_sums(&entries, |i: &Income| i.income_type.as_str()).is_empty());
        assert_eq!(total(&entries), 0.0);
    }

    #[test]
    fn test_monthly_trend_sorts_across_years() {
        let entries = vec![
            income("A", 10.0, date(2024, 1, 20)),
            income("A", 20.0, date(2023, 12, 3)),
            income("A", 5.0, date(2024, 1, 2)),
        ];

        let trend = monthly_trend(&entries);

        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].month.label(), "Dec 2023");
        assert_eq!(trend[0].total, 20.0);
        assert_eq!(trend[1].month.label(), "Jan 2024");
        assert_eq!(trend[1].total, 15.0);
    }

    #[test]
    fn test_trailing_average_over_past_months() {
        let today = date(2024, 3, 10);
        let entries = vec![
            expense(150.0, date(2024, 1, 4)),
            expense(50.0, date(2024, 1, 28)),
            expense(300.0, date(2024, 2, 14)),
            expense(999.0, date(2024, 3, 1)),
        ];

        assert_eq!(trailing_average_suggestion(&entries, today), 250.0);
        assert_eq!(month_total(&entries, 2024, 3), 999.0);

        let past = past_month_totals(&entries, today);
        assert_eq!(past.len(), 2);
        assert_eq!(past[0].total, 200.0);
    }

    #[test]
    fn test_trailing_average_without_history() {
        let today = date(2024, 3, 10);
        assert_eq!(trailing_average_suggestion::<Expense>(&[], today), 0.0);

        let only_current = vec![expense(80.0, date(2024, 3, 2))];
        assert_eq!(trailing_average_suggestion(&only_current, today), 0.0);
    }

    #[test]
    fn test_same_month_of_other_year_is_history() {
        let today = date(2024, 3, 10);
        let entries = vec![expense(120.0, date(2023, 3, 15))];

        assert_eq!(trailing_average_suggestion(&entries, today), 120.0);
    }

    fn budget(amount: f64, starts: NaiveDate) -> Budget {
        Budget {
            id: format!("b-{}", amount),
            amount,
            category: "Office Supplies".to_string(),
            start_date: starts,
            responsible_person: "Ann".to_string(),
            notes: String::new(),
            phone: "0771234567".to_string(),
        }
    }

    #[test]
    fn test_previous_month_rolls_back_over_new_year() {
        let january = MonthKey::of(date(2024, 1, 15));
        assert_eq!(january.previous(), MonthKey { year: 2023, month: 12 });

        let march = MonthKey::of(date(2024, 3, 1));
        assert_eq!(march.previous(), MonthKey { year: 2024, month: 2 });
    }

    #[test]
    fn test_previous_month_total_in_january() {
        let today = date(2024, 1, 10);
        let entries = vec![
            expense(40.0, date(2023, 12, 1)),
            expense(60.0, date(2023, 12, 31)),
            expense(500.0, date(2024, 12, 5)),
            expense(700.0, date(2024, 1, 2)),
        ];

        assert_eq!(previous_month_total(&entries, today), 100.0);
    }

    #[test]
    fn test_previous_month_check_within_budget() {
        let today = date(2024, 5, 20);
        let expenses = vec![expense(300.0, date(2024, 4, 3)), expense(900.0, date(2024, 5, 1))];
        let budgets = vec![budget(200.0, date(2024, 4, 1)), budget(100.0, date(2024, 4, 15))];

        let check = previous_month_check(&expenses, &budgets, today);

        assert_eq!(check.month.label(), "Apr 2024");
        assert_eq!(check.expenses, 300.0);
        assert_eq!(check.budget, 300.0);
        assert!(check.within_budget());
    }

    #[test]
    fn test_previous_month_check_over_budget() {
        let today = date(2024, 1, 5);
        let expenses = vec![expense(250.0, date(2023, 12, 12))];
        let budgets = vec![budget(200.0, date(2023, 12, 1)), budget(999.0, date(2024, 1, 1))];

        let check = previous_month_check(&expenses, &budgets, today);

        assert_eq!(check.budget, 200.0);
        assert!(!check.within_budget());
    }

    #[test]
    fn test_previous_month_check_without_entries() {
        let check = previous_month_check(&[], &[], date(2024, 7, 1));

        assert_eq!(check.expenses, 0.0);
        assert_eq!(check.budget, 0.0);
        assert!(check.within_budget());
    }

    #[test]
    fn test_search_matches_text_and_numbers() {
        let entry = income("Monthly", 1500.0, date(2024, 4, 1));

        assert!(matches_search(&entry, ""));
        assert!(matches_search(&entry, "royal"));
        assert!(matches_search(&entry, "MONTHLY"));
        assert!(matches_search(&entry, "1500"));
        assert!(matches_search(&entry, "2024-04"));
        assert!(!matches_search(&entry, "salary"));
    }

    #[test]
    fn test_summary_with_groups() {
        let entries = vec![
            income("A", 100.0, date(2024, 1, 5)),
            income("B", 50.0, date(2024, 2, 6)),
        ];

        let summary = summarize(&entries)
            .with_group("By Type", &entries, |i: &Income| i.income_type.as_str());

        assert_eq!(summary.total, 150.0);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.monthly.len(), 2);
        assert_eq!(summary.groups[0].0, "By Type");
        assert_eq!(summary.groups[0].1.len(), 2);
    }
}
