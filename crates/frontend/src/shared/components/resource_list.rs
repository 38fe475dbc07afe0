use contracts::domain::common::SelectableEntity;
use contracts::shared::remote_selection::ResourceKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{delete, get_json};

/// Таблица всех сущностей одного вида (демо и обычные) с удалением
///
/// Reloads whenever `reload` changes.
#[component]
pub fn ResourceList<T>(
    kind: ResourceKind,
    #[prop(into)]
    reload: Signal<u32>,
    /// Second column text
    describe: fn(&T) -> String,
) -> impl IntoView
where
    T: SelectableEntity + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let items = RwSignal::new(Vec::<T>::new());
    let error = RwSignal::new(None::<String>);
    let local_reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        local_reload.track();
        spawn_local(async move {
            match get_json::<Vec<T>>(&format!("/api/{}/", kind)).await {
                Ok(list) => {
                    items.set(list);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load {}: {}", kind, e);
                    error.set(Some(e));
                }
            }
        });
    });

    let remove = move |id: String| {
        spawn_local(async move {
            match delete(&format!("/api/{}/{}", kind, id)).await {
                Ok(()) => local_reload.update(|n| *n += 1),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        {move || error.get().map(|e| view! { <div class="alert alert--danger">{e}</div> })}
        <table class="table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Details"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || items.get()
                    key=|item| item.id_key()
                    children=move |item| {
                        let id = item.id_key();
                        view! {
                            <tr>
                                <td>{item.display_name()}</td>
                                <td>{describe(&item)}</td>
                                <td>
                                    <button
                                        class="button button--ghost"
                                        on:click=move |_| remove(id.clone())
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
