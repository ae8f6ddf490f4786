use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use shared::{LoginRequest, RegisterRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_toast::Toast;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const SESSION_KEY: &str = "finance-tracker.session";

/// What survives a page reload after logging in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user_id: String,
}

#[derive(Clone, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// Display name, once the profile has been fetched
    pub user_name: Option<String>,
    pub submitting: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseSessionActions {
    pub login: Callback<LoginRequest>,
    /// Registers, then reports success so the page can switch to login
    pub register: Callback<(RegisterRequest, Callback<()>)>,
    pub logout: Callback<()>,
}

pub struct UseSessionResult {
    pub state: SessionState,
    pub actions: UseSessionActions,
}

#[hook]
pub fn use_session(api_client: &ApiClient, notify: &Callback<Toast>) -> UseSessionResult {
    let session = use_state(|| LocalStorage::get::<Session>(SESSION_KEY).ok());
    let user_name = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    // Resolve the display name; an expired token ends the session
    {
        let api_client = api_client.clone();
        let session = session.clone();
        let user_name = user_name.clone();
        use_effect_with((*session).clone(), move |current| {
            if let Some(current) = current.clone() {
                spawn_local(async move {
                    match api_client.me(&current.token).await {
                        Ok(profile) => user_name.set(Some(profile.name)),
                        Err(e) => {
                            Logger::warn_with_component("session", &format!("Session rejected: {}", e));
                            LocalStorage::delete(SESSION_KEY);
                            user_name.set(None);
                            session.set(None);
                        }
                    }
                });
            }
            || ()
        });
    }

    let login = {
        let api_client = api_client.clone();
        let session = session.clone();
        let submitting = submitting.clone();
        let notify = notify.clone();

        use_callback((), move |request: LoginRequest, _| {
            let api_client = api_client.clone();
            let session = session.clone();
            let submitting = submitting.clone();
            let notify = notify.clone();

            spawn_local(async move {
                submitting.set(true);

                match api_client.login(&request).await {
                    Ok(response) => {
                        let next = Session {
                            token: response.token,
                            user_id: response.user_id,
                        };
                        if let Err(e) = LocalStorage::set(SESSION_KEY, &next) {
                            gloo::console::warn!("Failed to persist session:", e.to_string());
                        }
                        Logger::info_with_component("session", "User logged in");
                        notify.emit(Toast::success(response.message));
                        session.set(Some(next));
                    }
                    Err(e) => {
                        gloo::console::error!("Login failed:", e.clone());
                        notify.emit(Toast::error(e));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let register = {
        let api_client = api_client.clone();
        let submitting = submitting.clone();
        let notify = notify.clone();

        use_callback((), move |(request, on_done): (RegisterRequest, Callback<()>), _| {
            let api_client = api_client.clone();
            let submitting = submitting.clone();
            let notify = notify.clone();

            spawn_local(async move {
                submitting.set(true);

                match api_client.register(&request).await {
                    Ok(response) => {
                        notify.emit(Toast::success(response.message));
                        on_done.emit(());
                    }
                    Err(e) => {
                        gloo::console::error!("Registration failed:", e.clone());
                        notify.emit(Toast::error(e));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let logout = {
        let session = session.clone();
        let user_name = user_name.clone();
        use_callback((), move |_: (), _| {
            LocalStorage::delete(SESSION_KEY);
            Logger::info_with_component("session", "User logged out");
            user_name.set(None);
            session.set(None);
        })
    };

    UseSessionResult {
        state: SessionState {
            session: (*session).clone(),
            user_name: (*user_name).clone(),
            submitting: *submitting,
        },
        actions: UseSessionActions {
            login,
            register,
            logout,
        },
    }
}
