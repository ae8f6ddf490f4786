use shared::validation::validate;
use shared::{Draft, EntryResource, Operation, ValidationReport, ValidationScope};
use yew::prelude::*;

use super::field_input::FieldInput;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct EntryFormProps<R: EntryResource + PartialEq> {
    /// Request plus a callback the owner fires once the server accepted it
    pub on_submit: Callback<(R::Request, Callback<()>)>,
    #[prop_or_default]
    pub saving: bool,
}

/// Create form rendered from the resource's field catalog.
///
/// Every field is checked with the form rules before anything is sent; the
/// draft is only cleared after a successful save.
#[function_component(EntryForm)]
pub fn entry_form<R: EntryResource + PartialEq>(props: &EntryFormProps<R>) -> Html {
    let draft = use_state(Draft::new);
    let report = use_state(ValidationReport::default);
    let today = date_utils::today();

    let on_change = {
        let draft = draft.clone();
        let report = report.clone();
        Callback::from(move |(name, value): (String, String)| {
            let mut next = (*draft).clone();
            next.set(name, value);
            draft.set(next);
            if !report.is_valid() {
                report.set(ValidationReport::default());
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let report = report.clone();
        let submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let checked = validate(R::fields(), &*draft, Operation::Create, ValidationScope::Form { today });
            if !checked.is_valid() {
                report.set(checked);
                return;
            }
            report.set(ValidationReport::default());

            let clear = {
                let draft = draft.clone();
                Callback::from(move |_| draft.set(Draft::new()))
            };
            submit.emit((R::request_from(&draft), clear));
        })
    };

    html! {
        <section class="entry-form-section">
            <h2>{format!("Add {}", R::TITLE)}</h2>
            <form class="entry-form" onsubmit={on_submit} novalidate={true}>
                {for R::fields().iter().map(|spec| html! {
                    <FieldInput
                        spec={*spec}
                        value={draft.get(spec.name).to_string()}
                        on_change={on_change.clone()}
                        error={report.message_for(spec.name).map(str::to_string)}
                        disabled={props.saving}
                        today={today}
                    />
                })}
                <button type="submit" class="submit-button" disabled={props.saving}>
                    {if props.saving { "Saving...".to_string() } else { format!("Add {}", R::TITLE) }}
                </button>
            </form>
        </section>
    }
}
