use shared::report::format_amount;
use shared::validation::{parse_amount, validate};
use shared::{Draft, EntryResource, FieldKind, FieldSpec, Operation, ValidationReport, ValidationScope};
use yew::prelude::*;

use super::field_input::FieldInput;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct EntryTableProps<R: EntryResource + PartialEq> {
    pub entries: Vec<R::Entry>,
    pub loading: bool,
    #[prop_or_default]
    pub saving: bool,
    pub on_update: Callback<(String, R::Request, Callback<()>)>,
    pub on_delete: Callback<String>,
    /// Shows a View button per row when set
    #[prop_or_default]
    pub on_view: Option<Callback<String>>,
}

#[derive(Clone, PartialEq)]
struct EditRow {
    id: String,
    draft: Draft,
}

pub(super) fn display_value(spec: &FieldSpec, draft: &Draft) -> String {
    let raw = draft.get(spec.name);
    match spec.kind {
        FieldKind::Amount { .. } => parse_amount(raw).map(format_amount).unwrap_or_else(|| raw.to_string()),
        _ => raw.to_string(),
    }
}

/// Entry list with one row editable in place at a time
#[function_component(EntryTable)]
pub fn entry_table<R: EntryResource + PartialEq>(props: &EntryTableProps<R>) -> Html {
    let editing = use_state(|| Option::<EditRow>::None);
    let report = use_state(ValidationReport::default);
    let today = date_utils::today();

    let on_change = {
        let editing = editing.clone();
        Callback::from(move |(name, value): (String, String)| {
            if let Some(row) = (*editing).clone() {
                let mut draft = row.draft;
                draft.set(name, value);
                editing.set(Some(EditRow { id: row.id, draft }));
            }
        })
    };

    let on_cancel = {
        let editing = editing.clone();
        let report = report.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            report.set(ValidationReport::default());
        })
    };

    let on_save = {
        let editing = editing.clone();
        let report = report.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(row) = (*editing).clone() else {
                return;
            };

            let checked = validate(R::fields(), &row.draft, Operation::Update, ValidationScope::Form { today });
            if !checked.is_valid() {
                report.set(checked);
                return;
            }
            report.set(ValidationReport::default());

            let done = {
                let editing = editing.clone();
                Callback::from(move |_| editing.set(None))
            };
            on_update.emit((row.id, R::request_from(&row.draft), done));
        })
    };

    html! {
        <section class="entries-section">
            <h2>{format!("{} Records", R::TITLE)}</h2>

            {if props.loading && props.entries.is_empty() {
                html! { <div class="loading">{format!("Loading {}...", R::COLLECTION)}</div> }
            } else if props.entries.is_empty() {
                html! { <div class="empty">{format!("No {} recorded yet", R::COLLECTION)}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="entries-table">
                            <thead>
                                <tr>
                                    {for R::fields().iter().map(|spec| html! { <th>{spec.label}</th> })}
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.entries.iter().map(|entry| {
                                    let id = R::id(entry).to_string();
                                    let edit_row = (*editing).as_ref().filter(|row| row.id == id);

                                    match edit_row {
                                        Some(row) => html! {
                                            <tr class="editing">
                                                {for R::fields().iter().map(|spec| html! {
                                                    <td>
                                                        {if spec.editable {
                                                            html! {
                                                                <FieldInput
                                                                    spec={*spec}
                                                                    value={row.draft.get(spec.name).to_string()}
                                                                    on_change={on_change.clone()}
                                                                    error={report.message_for(spec.name).map(str::to_string)}
                                                                    disabled={props.saving}
                                                                    today={today}
                                                                    compact={true}
                                                                />
                                                            }
                                                        } else {
                                                            html! { {display_value(spec, &row.draft)} }
                                                        }}
                                                    </td>
                                                })}
                                                <td class="actions">
                                                    <button class="save" onclick={on_save.clone()} disabled={props.saving}>{"Save"}</button>
                                                    <button class="cancel" onclick={on_cancel.clone()}>{"Cancel"}</button>
                                                </td>
                                            </tr>
                                        },
                                        None => {
                                            let draft = R::draft_from(entry);
                                            let on_edit = {
                                                let editing = editing.clone();
                                                let report = report.clone();
                                                let row = EditRow { id: id.clone(), draft: draft.clone() };
                                                Callback::from(move |_: MouseEvent| {
                                                    report.set(ValidationReport::default());
                                                    editing.set(Some(row.clone()));
                                                })
                                            };
                                            let on_delete = {
                                                let on_delete = props.on_delete.clone();
                                                let id = id.clone();
                                                Callback::from(move |_: MouseEvent| {
                                                    if gloo::dialogs::confirm(&format!("Delete this {}?", R::TITLE.to_lowercase())) {
                                                        on_delete.emit(id.clone());
                                                    }
                                                })
                                            };

                                            let view_button = props.on_view.clone().map(|on_view| {
                                                let id = id.clone();
                                                let onclick = Callback::from(move |_: MouseEvent| on_view.emit(id.clone()));
                                                html! { <button class="view" {onclick}>{"View"}</button> }
                                            });

                                            html! {
                                                <tr>
                                                    {for R::fields().iter().map(|spec| html! {
                                                        <td>{display_value(spec, &draft)}</td>
                                                    })}
                                                    <td class="actions">
                                                        {view_button}
                                                        <button class="edit" onclick={on_edit} disabled={props.saving}>{"Edit"}</button>
                                                        <button class="delete" onclick={on_delete} disabled={props.saving}>{"Delete"}</button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::fields::BUDGET_FIELDS;

    #[test]
    fn test_amounts_are_shown_as_money() {
        let draft = Draft::new().with("amount", "2500").with("category", "Financial");

        assert_eq!(display_value(&BUDGET_FIELDS[0], &draft), "Rs 2500.00");
        assert_eq!(display_value(&BUDGET_FIELDS[1], &draft), "Financial");
    }
}
