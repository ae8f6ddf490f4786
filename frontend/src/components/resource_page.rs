use shared::aggregation::total;
use shared::report::format_amount;
use shared::EntryResource;
use yew::prelude::*;

use super::entry_detail::EntryDetail;
use super::entry_form::EntryForm;
use super::entry_table::EntryTable;
use crate::hooks::use_entries::{EntriesState, UseEntriesActions};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ResourcePageProps<R: EntryResource + PartialEq> {
    pub state: EntriesState<R>,
    pub actions: UseEntriesActions<R>,
    pub api_client: ApiClient,
}

/// Create form, running total and inline-edit table for one resource, or
/// the read-only detail of a single entry
#[function_component(ResourcePage)]
pub fn resource_page<R: EntryResource + PartialEq>(props: &ResourcePageProps<R>) -> Html {
    let viewing = use_state(|| Option::<String>::None);
    let sum = total(&props.state.entries);

    if let Some(id) = (*viewing).clone() {
        let on_close = {
            let viewing = viewing.clone();
            Callback::from(move |_| viewing.set(None))
        };
        return html! {
            <EntryDetail<R> api_client={props.api_client.clone()} {id} {on_close} />
        };
    }

    let on_view = {
        let viewing = viewing.clone();
        Callback::from(move |id: String| viewing.set(Some(id)))
    };

    html! {
        <div class="resource-page">
            <EntryForm<R>
                on_submit={props.actions.create.clone()}
                saving={props.state.saving}
            />
            <div class="total-card">
                <h3>{format!("Total {}", R::TITLE)}</h3>
                <p class="total-amount">{format_amount(sum)}</p>
            </div>
            <EntryTable<R>
                entries={props.state.entries.clone()}
                loading={props.state.loading}
                saving={props.state.saving}
                on_update={props.actions.update.clone()}
                on_delete={props.actions.delete.clone()}
                on_view={Some(on_view)}
            />
        </div>
    }
}
