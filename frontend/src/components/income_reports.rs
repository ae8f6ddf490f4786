use shared::aggregation::{group_sums, summarize};
use shared::report::format_amount;
use shared::{Income, IncomeResource, TabularReport};
use yew::prelude::*;

use super::charts::{ChartCard, ChartData};
use super::report_document::{print_page, ReportDocument};
use crate::services::api::ApiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportView {
    Analyzed,
    FullDetails,
}

#[derive(Properties, PartialEq)]
pub struct IncomeReportsProps {
    pub incomes: Vec<Income>,
    pub api_client: ApiClient,
}

/// Analyzed and full-detail income reports, printable from the browser
#[function_component(IncomeReports)]
pub fn income_reports(props: &IncomeReportsProps) -> Html {
    let view = use_state(|| ReportView::Analyzed);

    let select = |target: ReportView| {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(target))
    };
    let on_print = Callback::from(|_: MouseEvent| print_page());

    let incomes = &props.incomes;
    let by_type = group_sums(incomes, |i: &Income| i.income_type.as_str());
    let by_category = group_sums(incomes, |i: &Income| i.income_category.as_str());

    let document = match *view {
        ReportView::Analyzed => {
            let summary = summarize(incomes)
                .with_group("By Type", incomes, |i: &Income| i.income_type.as_str())
                .with_group("By Category", incomes, |i: &Income| i.income_category.as_str());
            let report = TabularReport::from_summary("Income Summary", &summary);

            html! {
                <div class="analyzed-report">
                    <div class="total-card">
                        <h3>{"Total Income"}</h3>
                        <p class="total-amount">{format_amount(summary.total)}</p>
                    </div>
                    <div class="chart-grid">
                        <ChartCard title="Income by Type" data={ChartData::Pie(by_type)} />
                        <ChartCard title="Income by Category" data={ChartData::Bar(by_category)} />
                    </div>
                    <ReportDocument report={report} />
                </div>
            }
        }
        ReportView::FullDetails => html! {
            <ReportDocument report={TabularReport::for_entries::<IncomeResource>(incomes)} />
        },
    };

    html! {
        <div class="income-reports">
            <h2 class="no-print">{"Income Reports"}</h2>
            <div class="report-cards no-print">
                <div class="report-card">
                    <h3>{"Analyzed Report"}</h3>
                    <p>{"Total income, charts and the income summary"}</p>
                    <button onclick={select(ReportView::Analyzed)}>{"View"}</button>
                </div>
                <div class="report-card">
                    <h3>{"Full Details Report"}</h3>
                    <p>{"Every income record, printable or as a spreadsheet"}</p>
                    <button onclick={select(ReportView::FullDetails)}>{"View"}</button>
                    <a class="download-link" href={props.api_client.csv_url::<IncomeResource>()} download="incomes_report.csv">
                        {"Spreadsheet (CSV)"}
                    </a>
                </div>
            </div>
            <div class="report-actions no-print">
                <button class="print-button" onclick={on_print}>{"Print / Save as PDF"}</button>
            </div>
            {document}
        </div>
    }
}
