use shared::EntryResource;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::entry_table::display_value;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct EntryDetailProps {
    pub api_client: ApiClient,
    pub id: String,
    pub on_close: Callback<()>,
}

#[derive(Clone, PartialEq)]
enum DetailState<E> {
    Loading,
    Loaded(E),
    Failed(String),
}

/// Label and display value for every catalog field of an entry
fn detail_rows<R: EntryResource>(entry: &R::Entry) -> Vec<(&'static str, String)> {
    let draft = R::draft_from(entry);
    R::fields()
        .iter()
        .map(|spec| (spec.label, display_value(spec, &draft)))
        .collect()
}

/// Read-only view of one entry, fetched fresh from the server by id
#[function_component(EntryDetail)]
pub fn entry_detail<R: EntryResource + PartialEq>(props: &EntryDetailProps) -> Html {
    let state = use_state(|| DetailState::<R::Entry>::Loading);

    {
        let state = state.clone();
        let api_client = props.api_client.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            state.set(DetailState::Loading);
            spawn_local(async move {
                match api_client.get::<R>(&id).await {
                    Ok(entry) => state.set(DetailState::Loaded(entry)),
                    Err(e) => {
                        Logger::error_with_component(R::COLLECTION, &format!("Failed to load {} {}: {}", R::TITLE, id, e));
                        state.set(DetailState::Failed(e));
                    }
                }
            });
            || ()
        });
    }

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let body = match &*state {
        DetailState::Loading => html! { <div class="loading">{"Loading..."}</div> },
        DetailState::Failed(message) => html! { <div class="error-message">{message}</div> },
        DetailState::Loaded(entry) => html! {
            <dl class="detail-grid">
                {for detail_rows::<R>(entry).into_iter().map(|(label, value)| html! {
                    <>
                        <dt>{label}</dt>
                        <dd>{value}</dd>
                    </>
                })}
            </dl>
        },
    };

    html! {
        <section class="entry-detail">
            <div class="detail-header">
                <h2>{format!("{} Details", R::TITLE)}</h2>
                <button class="close" onclick={on_close}>{"Back"}</button>
            </div>
            {body}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{Expense, ExpenseResource};

    #[test]
    fn test_detail_rows_follow_field_catalog() {
        let expense = Expense {
            id: "e-1".to_string(),
            name: "Stationers".to_string(),
            description: "Printer paper".to_string(),
            category: "Administrative".to_string(),
            amount: 1250.0,
            date: NaiveDate::from_ymd_opt(2024, 2, 9).unwrap(),
            responsible_person: "Ann".to_string(),
            notes: String::new(),
            phone: "0771234567".to_string(),
        };

        let rows = detail_rows::<ExpenseResource>(&expense);

        assert_eq!(rows.len(), ExpenseResource::fields().len());
        assert!(rows.iter().any(|(_, value)| value == "Stationers"));
        assert!(rows.iter().any(|(_, value)| value == "Rs 1250.00"));
        assert!(rows.iter().any(|(_, value)| value == "2024-02-09"));
    }
}
