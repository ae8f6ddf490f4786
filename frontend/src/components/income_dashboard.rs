use shared::aggregation::{filter_entries, group_sums, monthly_trend, total};
use shared::report::format_amount;
use shared::{Income, IncomeResource};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::charts::{ChartCard, ChartData};
use super::entry_form::EntryForm;
use super::entry_table::EntryTable;
use crate::hooks::use_entries::{EntriesState, UseEntriesActions};

#[derive(Properties, PartialEq)]
pub struct IncomeDashboardProps {
    pub state: EntriesState<IncomeResource>,
    pub actions: UseEntriesActions<IncomeResource>,
}

#[function_component(IncomeDashboard)]
pub fn income_dashboard(props: &IncomeDashboardProps) -> Html {
    let search = use_state(String::new);

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let filtered: Vec<&Income> = filter_entries(&props.state.entries, &search);
    let visible: Vec<Income> = filtered.iter().map(|income| (*income).clone()).collect();

    let sum = total(filtered.iter().copied());
    let by_type = group_sums(filtered.iter().copied(), |i: &Income| i.income_type.as_str());
    let by_category = group_sums(filtered.iter().copied(), |i: &Income| i.income_category.as_str());
    let by_source = group_sums(filtered.iter().copied(), |i: &Income| i.income_source.as_str());
    let trend = monthly_trend(filtered.iter().copied());

    html! {
        <div class="income-dashboard">
            <EntryForm<IncomeResource>
                on_submit={props.actions.create.clone()}
                saving={props.state.saving}
            />

            <div class="search-bar">
                <input
                    type="text"
                    placeholder="Search incomes by type or category..."
                    value={(*search).clone()}
                    oninput={on_search}
                />
            </div>

            <div class="total-card">
                <h3>{"Total Income"}</h3>
                <p class="total-amount">{format_amount(sum)}</p>
            </div>

            <div class="chart-grid">
                <ChartCard title="Total Income by Type" data={ChartData::Pie(by_type)} />
                <ChartCard title="Total Income by Category" data={ChartData::Bar(by_category)} />
                <ChartCard title="Income by Source" data={ChartData::line_of_groups(&by_source)} />
                <ChartCard title="Monthly Income Trend" data={ChartData::line_of_months(&trend)} />
            </div>

            <EntryTable<IncomeResource>
                entries={visible}
                loading={props.state.loading}
                saving={props.state.saving}
                on_update={props.actions.update.clone()}
                on_delete={props.actions.delete.clone()}
            />
        </div>
    }
}
