use chrono::NaiveDate;
use shared::{FieldKind, FieldSpec};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FieldInputProps {
    pub spec: FieldSpec,
    pub value: String,
    /// Emits `(field name, new raw value)`
    pub on_change: Callback<(String, String)>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
    /// Upper bound for not-future date pickers
    pub today: NaiveDate,
    /// Table cells drop the label and the error line
    #[prop_or_default]
    pub compact: bool,
}

/// One input control rendered from a field catalog entry
#[function_component(FieldInput)]
pub fn field_input(props: &FieldInputProps) -> Html {
    let spec = props.spec;
    let id = format!("field-{}", spec.name);
    let name = spec.name.to_string();

    let on_input = {
        let on_change = props.on_change.clone();
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((name.clone(), input.value()));
        })
    };

    let control = match spec.kind {
        FieldKind::Choice(options) => {
            let on_select = {
                let on_change = props.on_change.clone();
                let name = name.clone();
                Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    on_change.emit((name.clone(), select.value()));
                })
            };

            html! {
                <select id={id.clone()} onchange={on_select} disabled={props.disabled}>
                    <option value="" selected={props.value.is_empty()}>{format!("Select {}", spec.label)}</option>
                    {for options.iter().map(|option| html! {
                        <option value={*option} selected={props.value == *option}>{*option}</option>
                    })}
                </select>
            }
        }
        FieldKind::LongText => {
            let on_text = {
                let on_change = props.on_change.clone();
                let name = name.clone();
                Callback::from(move |e: InputEvent| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    on_change.emit((name.clone(), area.value()));
                })
            };

            html! {
                <textarea
                    id={id.clone()}
                    rows={if props.compact { "1" } else { "3" }}
                    value={props.value.clone()}
                    oninput={on_text}
                    disabled={props.disabled}
                />
            }
        }
        FieldKind::Date { not_future } => {
            let max = not_future.then(|| props.today.to_string());
            html! {
                <input
                    type="date"
                    id={id.clone()}
                    max={max}
                    value={props.value.clone()}
                    oninput={on_input}
                    disabled={props.disabled}
                />
            }
        }
        FieldKind::Amount { whole } => html! {
            <input
                type="number"
                id={id.clone()}
                min={if whole { "1" } else { "0.01" }}
                step={if whole { "1" } else { "0.01" }}
                placeholder="0.00"
                value={props.value.clone()}
                oninput={on_input}
                disabled={props.disabled}
            />
        },
        FieldKind::Phone => html! {
            <input
                type="tel"
                id={id.clone()}
                maxlength="10"
                placeholder="0771234567"
                value={props.value.clone()}
                oninput={on_input}
                disabled={props.disabled}
            />
        },
        FieldKind::Text | FieldKind::Letters => html! {
            <input
                type="text"
                id={id.clone()}
                value={props.value.clone()}
                oninput={on_input}
                disabled={props.disabled}
            />
        },
    };

    if props.compact {
        return html! {
            <div class={classes!("cell-input", props.error.is_some().then_some("invalid"))} title={props.error.clone()}>
                {control}
            </div>
        };
    }

    html! {
        <div class={classes!("form-group", props.error.is_some().then_some("invalid"))}>
            <label for={id}>{spec.label}</label>
            {control}
            {if let Some(error) = props.error.as_ref() {
                html! { <div class="field-error">{error}</div> }
            } else { html! {} }}
        </div>
    }
}
