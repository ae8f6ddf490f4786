use chrono::Datelike;
use shared::aggregation::{
    month_total, past_month_totals, previous_month_check, trailing_average_suggestion,
};
use shared::report::format_amount;
use shared::{Budget, Expense, MonthKey, TabularReport};
use yew::prelude::*;

use super::report_document::{print_page, ReportDocument};
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct ExpenseInsightsProps {
    pub expenses: Vec<Expense>,
    pub budgets: Vec<Budget>,
    pub loading: bool,
}

/// Current month spend, a budget suggested from earlier months and last
/// month's spend checked against last month's budgets
#[function_component(ExpenseInsights)]
pub fn expense_insights(props: &ExpenseInsightsProps) -> Html {
    let show_report = use_state(|| false);

    let today = date_utils::today();
    let current = MonthKey::of(today);

    let this_month = month_total(&props.expenses, today.year(), today.month());
    let suggestion = trailing_average_suggestion(&props.expenses, today);
    let past = past_month_totals(&props.expenses, today);
    let check = previous_month_check(&props.expenses, &props.budgets, today);

    if props.loading && props.expenses.is_empty() {
        return html! { <div class="loading">{"Loading expenses..."}</div> };
    }

    let toggle_report = {
        let show_report = show_report.clone();
        Callback::from(move |_: MouseEvent| show_report.set(!*show_report))
    };
    let on_print = Callback::from(|_: MouseEvent| print_page());

    let next_month_button = if check.within_budget() {
        html! { <button class="unlock-button">{"Congrats! Check next month"}</button> }
    } else {
        html! { <button class="unlock-button" disabled={true}>{"Locked (Expenses Exceed Budget)"}</button> }
    };

    html! {
        <div class="expense-insights">
            <h2 class="no-print">{"Budget Insights"}</h2>
            <div class="insight-cards no-print">
                <div class="total-card">
                    <h3>{format!("Total Expenses for {}", current.label())}</h3>
                    <p class="total-amount">{format_amount(this_month)}</p>
                </div>
                <div class="total-card">
                    <h3>{"Budget Suggestion for Next Month"}</h3>
                    <p class="total-amount">{format_amount(suggestion)}</p>
                    {if past.is_empty() {
                        html! { <p class="hint">{"No earlier months to base a suggestion on"}</p> }
                    } else {
                        html! { <p class="hint">{format!("Average of {} previous month(s)", past.len())}</p> }
                    }}
                </div>
                <div class="total-card budget-check">
                    <h3>{format!("{} Against Budget", check.month.label())}</h3>
                    <p>{format!("Total expenses: {}", format_amount(check.expenses))}</p>
                    <p>{format!("Total budget: {}", format_amount(check.budget))}</p>
                    {next_month_button}
                    <p class="hint">{"Unlocks only when last month's expenses stayed within its budget"}</p>
                </div>
            </div>

            <section class="entries-section no-print">
                <h3>{"Past Month Analysis"}</h3>
                <table class="entries-table">
                    <thead>
                        <tr>
                            <th>{"Month"}</th>
                            <th>{"Total Expenses"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for past.iter().map(|month| html! {
                            <tr>
                                <td>{month.month.label()}</td>
                                <td>{format_amount(month.total)}</td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </section>

            <div class="report-actions no-print">
                <button onclick={toggle_report}>
                    {if *show_report { "Hide Expense Report" } else { "Expense Report" }}
                </button>
                if *show_report {
                    <button class="print-button" onclick={on_print}>{"Print / Save as PDF"}</button>
                }
            </div>
            if *show_report {
                <ReportDocument report={TabularReport::expense_report(this_month, suggestion, &past)} />
            }
        </div>
    }
}
