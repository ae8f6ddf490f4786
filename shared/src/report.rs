//! Tabular reports built from in-memory entry lists.
//!
//! The frontend renders these as printable, paginated documents and the
//! backend writes the same tables out as CSV.

use crate::aggregation::{MonthlyTotal, Summary};
use crate::resource::EntryResource;

/// Format an amount the way every report shows money
pub fn format_amount(amount: f64) -> String {
    format!("Rs {:.2}", amount)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabularReport {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One printed page of a report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPage<'a> {
    /// 1-based page number
    pub number: usize,
    pub total_pages: usize,
    pub rows: &'a [Vec<String>],
}

impl TabularReport {
    pub fn new(title: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            title: title.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Full-detail report: one row per entry with the resource's report columns
    pub fn for_entries<R: EntryResource>(entries: &[R::Entry]) -> Self {
        let mut report = Self::new(format!("{} Report", R::TITLE), R::report_columns());
        for entry in entries {
            report.push_row(R::report_row(entry));
        }
        report
    }

    /// Analyzed report: overall total, monthly totals and every named breakdown
    pub fn from_summary(title: impl Into<String>, summary: &Summary) -> Self {
        let mut report = Self::new(title, &["Section", "Item", "Entries", "Amount"]);

        report.push_row(vec![
            "Overall".to_string(),
            "Total".to_string(),
            summary.count.to_string(),
            format_amount(summary.total),
        ]);

        for month in &summary.monthly {
            report.push_row(vec![
                "Monthly".to_string(),
                month.month.label(),
                String::new(),
                format_amount(month.total),
            ]);
        }

        for (name, totals) in &summary.groups {
            for group in totals {
                report.push_row(vec![
                    name.clone(),
                    group.key.clone(),
                    group.count.to_string(),
                    format_amount(group.total),
                ]);
            }
        }

        report
    }

    /// Expense report: the current month total and the next month suggestion,
    /// followed by one row per past month
    pub fn expense_report(current_month_total: f64, suggestion: f64, past_months: &[MonthlyTotal]) -> Self {
        let mut report = Self::new("Expense Report", &["Month-Year", "Total Expense"]);

        report.push_row(vec![
            "Current Month Total".to_string(),
            format_amount(current_month_total),
        ]);
        report.push_row(vec![
            "Budget Suggestion for Next Month".to_string(),
            format_amount(suggestion),
        ]);
        for month in past_months {
            report.push_row(vec![month.month.label(), format_amount(month.total)]);
        }

        report
    }

    /// Split rows into pages; an empty report still yields one page
    pub fn paginate(&self, page_size: usize) -> Vec<ReportPage<'_>> {
        let page_size = page_size.max(1);
        if self.rows.is_empty() {
            return vec![ReportPage {
                number: 1,
                total_pages: 1,
                rows: &[],
            }];
        }

        let total_pages = (self.rows.len() + page_size - 1) / page_size;
        self.rows
            .chunks(page_size)
            .enumerate()
            .map(|(index, rows)| ReportPage {
                number: index + 1,
                total_pages,
                rows,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::summarize;
    use crate::resource::IncomeResource;
    use crate::Income;
    use chrono::NaiveDate;

    fn incomes(count: usize) -> Vec<Income> {
        (0..count)
            .map(|n| Income {
                id: format!("id-{}", n),
                income_source: "Investments".to_string(),
                description: format!("Dividend {}", n),
                income_category: "investment".to_string(),
                income_type: "Monthly".to_string(),
                amount: 100.0 + n as f64,
                date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                phone: "0771234567".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_income_report_rows() {
        let report = TabularReport::for_entries::<IncomeResource>(&incomes(1));

        assert_eq!(report.title, "Income Report");
        assert_eq!(
            report.columns,
            vec!["Income Source", "Category", "Type", "Amount", "Description", "Date"]
        );
        assert_eq!(
            report.rows[0],
            vec!["Investments", "investment", "Monthly", "Rs 100.00", "Dividend 0", "2024-05-01"]
        );
    }

    #[test]
    fn test_paginate_splits_rows() {
        let report = TabularReport::for_entries::<IncomeResource>(&incomes(25));
        let pages = report.paginate(10);

        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].rows.len(), 10);
        assert_eq!(pages[2].rows.len(), 5);
        assert_eq!(pages[2].number, 3);
        assert!(pages.iter().all(|p| p.total_pages == 3));
    }

    #[test]
    fn test_paginate_empty_report() {
        let report = TabularReport::for_entries::<IncomeResource>(&[]);
        let pages = report.paginate(10);

        assert_eq!(pages.len(), 1);
        assert!(pages[0].rows.is_empty());
    }

    #[test]
    fn test_expense_report_rows() {
        use crate::aggregation::MonthKey;

        let past = vec![
            MonthlyTotal {
                month: MonthKey { year: 2023, month: 12 },
                total: 120.0,
            },
            MonthlyTotal {
                month: MonthKey { year: 2024, month: 1 },
                total: 80.5,
            },
        ];

        let report = TabularReport::expense_report(42.0, 100.25, &past);

        assert_eq!(report.title, "Expense Report");
        assert_eq!(report.columns, vec!["Month-Year", "Total Expense"]);
        assert_eq!(report.rows.len(), 4);
        assert_eq!(report.rows[0], vec!["Current Month Total", "Rs 42.00"]);
        assert_eq!(report.rows[1], vec!["Budget Suggestion for Next Month", "Rs 100.25"]);
        assert_eq!(report.rows[2], vec!["Dec 2023", "Rs 120.00"]);
        assert_eq!(report.rows[3], vec!["Jan 2024", "Rs 80.50"]);
    }

    #[test]
    fn test_summary_report() {
        let entries = incomes(2);
        let summary = summarize(&entries)
            .with_group("By Type", &entries, |i: &Income| i.income_type.as_str());

        let report = TabularReport::from_summary("Income Analysis", &summary);

        assert_eq!(report.rows[0], vec!["Overall", "Total", "2", "Rs 201.00"]);
        assert_eq!(report.rows[1], vec!["Monthly", "May 2024", "", "Rs 201.00"]);
        assert_eq!(report.rows[2], vec!["By Type", "Monthly", "2", "Rs 201.00"]);
    }
}
