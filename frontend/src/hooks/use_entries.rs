use shared::EntryResource;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_toast::Toast;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

pub struct EntriesState<R: EntryResource> {
    pub entries: Vec<R::Entry>,
    pub loading: bool,
    /// True while a create, update or delete is in flight
    pub saving: bool,
}

impl<R: EntryResource> Clone for EntriesState<R> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            loading: self.loading,
            saving: self.saving,
        }
    }
}

impl<R: EntryResource> PartialEq for EntriesState<R> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && self.loading == other.loading && self.saving == other.saving
    }
}

pub struct UseEntriesActions<R: EntryResource> {
    pub refresh: Callback<()>,
    /// Request plus a callback fired once the server accepted it
    pub create: Callback<(R::Request, Callback<()>)>,
    pub update: Callback<(String, R::Request, Callback<()>)>,
    pub delete: Callback<String>,
}

impl<R: EntryResource> Clone for UseEntriesActions<R> {
    fn clone(&self) -> Self {
        Self {
            refresh: self.refresh.clone(),
            create: self.create.clone(),
            update: self.update.clone(),
            delete: self.delete.clone(),
        }
    }
}

impl<R: EntryResource> PartialEq for UseEntriesActions<R> {
    fn eq(&self, other: &Self) -> bool {
        self.refresh == other.refresh
            && self.create == other.create
            && self.update == other.update
            && self.delete == other.delete
    }
}

pub struct UseEntriesResult<R: EntryResource> {
    pub state: EntriesState<R>,
    pub actions: UseEntriesActions<R>,
}

/// Owns the fetched list for one resource.
///
/// The list only changes after the server confirmed a mutation; failures
/// leave it untouched and surface as an error toast.
#[hook]
pub fn use_entries<R: EntryResource>(api_client: &ApiClient, notify: &Callback<Toast>) -> UseEntriesResult<R> {
    let entries = use_state(Vec::<R::Entry>::new);
    let loading = use_state(|| true);
    let saving = use_state(|| false);

    let refresh = {
        let api_client = api_client.clone();
        let entries = entries.clone();
        let loading = loading.clone();
        let notify = notify.clone();

        use_callback((), move |_: (), _| {
            let api_client = api_client.clone();
            let entries = entries.clone();
            let loading = loading.clone();
            let notify = notify.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.list::<R>().await {
                    Ok(data) => entries.set(data),
                    Err(e) => {
                        gloo::console::error!("Failed to fetch entries:", e.clone());
                        notify.emit(Toast::error(e));
                    }
                }

                loading.set(false);
            });
        })
    };

    // Initial load
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let create = {
        let api_client = api_client.clone();
        let saving = saving.clone();
        let refresh = refresh.clone();
        let notify = notify.clone();

        use_callback((), move |(request, on_saved): (R::Request, Callback<()>), _| {
            let api_client = api_client.clone();
            let saving = saving.clone();
            let refresh = refresh.clone();
            let notify = notify.clone();

            spawn_local(async move {
                saving.set(true);

                match api_client.create::<R>(&request).await {
                    Ok(_) => {
                        Logger::info_with_component(R::COLLECTION, &format!("{} created", R::TITLE));
                        notify.emit(Toast::success(format!("{} added successfully", R::TITLE)));
                        on_saved.emit(());
                        refresh.emit(());
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to create entry:", e.clone());
                        notify.emit(Toast::error(e));
                    }
                }

                saving.set(false);
            });
        })
    };

    let update = {
        let api_client = api_client.clone();
        let saving = saving.clone();
        let refresh = refresh.clone();
        let notify = notify.clone();

        use_callback(
            (),
            move |(id, request, on_saved): (String, R::Request, Callback<()>), _| {
                let api_client = api_client.clone();
                let saving = saving.clone();
                let refresh = refresh.clone();
                let notify = notify.clone();

                spawn_local(async move {
                    saving.set(true);

                    match api_client.update::<R>(&id, &request).await {
                        Ok(_) => {
                            Logger::info_with_component(R::COLLECTION, &format!("{} {} updated", R::TITLE, id));
                            notify.emit(Toast::success(format!("{} updated successfully", R::TITLE)));
                            on_saved.emit(());
                            refresh.emit(());
                        }
                        Err(e) => {
                            gloo::console::error!("Failed to update entry:", e.clone());
                            notify.emit(Toast::error(e));
                        }
                    }

                    saving.set(false);
                });
            },
        )
    };

    let delete = {
        let api_client = api_client.clone();
        let saving = saving.clone();
        let refresh = refresh.clone();
        let notify = notify.clone();

        use_callback((), move |id: String, _| {
            let api_client = api_client.clone();
            let saving = saving.clone();
            let refresh = refresh.clone();
            let notify = notify.clone();

            spawn_local(async move {
                saving.set(true);

                match api_client.delete::<R>(&id).await {
                    Ok(response) => {
                        Logger::info_with_component(R::COLLECTION, &format!("{} {} deleted", R::TITLE, id));
                        notify.emit(Toast::success(response.message));
                        refresh.emit(());
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to delete entry:", e.clone());
                        notify.emit(Toast::error(e));
                    }
                }

                saving.set(false);
            });
        })
    };

    UseEntriesResult {
        state: EntriesState {
            entries: (*entries).clone(),
            loading: *loading,
            saving: *saving,
        },
        actions: UseEntriesActions {
            refresh,
            create,
            update,
            delete,
        },
    }
}
