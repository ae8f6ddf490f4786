use shared::{LoginRequest, RegisterRequest};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub on_login: Callback<LoginRequest>,
    pub on_register: Callback<(RegisterRequest, Callback<()>)>,
    pub submitting: bool,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn text_setter(target: &UseStateHandle<String>) -> Callback<InputEvent> {
    let target = target.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        target.set(input.value());
    })
}

/// Login form with a switch to registration.
///
/// Blank fields are sent as missing so the server answers with its own
/// "All fields are required" message.
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let registering = use_state(|| false);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);

    let on_submit = {
        let registering = registering.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let on_login = props.on_login.clone();
        let on_register = props.on_register.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *registering {
                let request = RegisterRequest {
                    name: optional(&name),
                    email: optional(&email),
                    password: optional(&password),
                };
                let registered = {
                    let registering = registering.clone();
                    let password = password.clone();
                    Callback::from(move |_| {
                        password.set(String::new());
                        registering.set(false);
                    })
                };
                on_register.emit((request, registered));
            } else {
                on_login.emit(LoginRequest {
                    email: optional(&email),
                    password: optional(&password),
                });
            }
        })
    };

    let on_toggle = {
        let registering = registering.clone();
        Callback::from(move |_: MouseEvent| registering.set(!*registering))
    };

    let title = if *registering { "Create an account" } else { "Sign in" };

    html! {
        <div class="login-page">
            <form class="login-form" onsubmit={on_submit}>
                <h2>{title}</h2>
                {if *registering {
                    html! {
                        <div class="form-group">
                            <label for="name">{"Name"}</label>
                            <input type="text" id="name" value={(*name).clone()} oninput={text_setter(&name)} />
                        </div>
                    }
                } else { html! {} }}
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input type="email" id="email" value={(*email).clone()} oninput={text_setter(&email)} />
                </div>
                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input type="password" id="password" value={(*password).clone()} oninput={text_setter(&password)} />
                </div>
                <button type="submit" class="submit-button" disabled={props.submitting}>
                    {if props.submitting { "Please wait..." } else { title }}
                </button>
                <button type="button" class="link-button" onclick={on_toggle}>
                    {if *registering { "Already registered? Sign in" } else { "New here? Create an account" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_inputs_become_missing() {
        assert_eq!(optional("   "), None);
        assert_eq!(optional(" a@b.c "), Some("a@b.c".to_string()));
    }
}
