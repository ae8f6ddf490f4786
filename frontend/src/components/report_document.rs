use shared::TabularReport;
use yew::prelude::*;

use crate::services::logging::Logger;

pub const ROWS_PER_PAGE: usize = 20;

/// Open the browser print dialog for the current view
pub fn print_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.print() {
        gloo::console::error!("Print failed:", e);
        Logger::error_with_component("reports", "Browser print dialog could not be opened");
    }
}

#[derive(Properties, PartialEq)]
pub struct ReportDocumentProps {
    pub report: TabularReport,
    #[prop_or(ROWS_PER_PAGE)]
    pub rows_per_page: usize,
}

/// Printable report split into fixed-size pages, each repeating the header row
#[function_component(ReportDocument)]
pub fn report_document(props: &ReportDocumentProps) -> Html {
    let report = &props.report;

    html! {
        <div class="report-document">
            {for report.paginate(props.rows_per_page).into_iter().map(|page| html! {
                <section class="report-page">
                    <h3 class="report-title">{&report.title}</h3>
                    <table class="report-table">
                        <thead>
                            <tr>
                                {for report.columns.iter().map(|column| html! { <th>{column}</th> })}
                            </tr>
                        </thead>
                        <tbody>
                            {if page.rows.is_empty() {
                                html! {
                                    <tr>
                                        <td colspan={report.columns.len().to_string()}>{"No records"}</td>
                                    </tr>
                                }
                            } else {
                                html! {
                                    {for page.rows.iter().map(|row| html! {
                                        <tr>
                                            {for row.iter().map(|cell| html! { <td>{cell}</td> })}
                                        </tr>
                                    })}
                                }
                            }}
                        </tbody>
                    </table>
                    <div class="report-footer">
                        {format!("Page {} of {}", page.number, page.total_pages)}
                    </div>
                </section>
            })}
        </div>
    }
}
