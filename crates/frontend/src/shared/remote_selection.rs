//! Leptos adapter for `RemoteSelectionStore`.
//!
//! The store lives in an `RwSignal`; an effect starts a load whenever the
//! demo flag changes and `spawn_local` settles it. Results of loads that were
//! overtaken by a newer one are dropped by the store itself.

use async_trait::async_trait;
use contracts::domain::common::SelectableEntity;
use contracts::shared::remote_selection::{
    FetchError, LoadKey, RemoteSelectionStore, ResourceFetcher, ResourceKind, SelectOption,
    Selection, SelectionMode, SelectionRequest,
};
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::api_url;

/// Загрузка коллекций через gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooFetcher;

#[async_trait(?Send)]
impl<T> ResourceFetcher<T> for GlooFetcher
where
    T: DeserializeOwned + 'static,
{
    async fn fetch(&self, path: &str) -> Result<Vec<T>, FetchError> {
        let url = api_url(path);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Handle to a reactive remote selection. `Copy`, so it can be moved into
/// any number of view closures.
pub struct RemoteSelection<T: Send + Sync + 'static> {
    store: RwSignal<RemoteSelectionStore<T>>,
}

impl<T: Send + Sync + 'static> Clone for RemoteSelection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RemoteSelection<T> {}

impl<T> RemoteSelection<T>
where
    T: SelectableEntity + Clone + Send + Sync + 'static,
{
    pub fn is_loading(&self) -> bool {
        self.store.with(|s| s.is_loading())
    }

    pub fn options(&self) -> Vec<SelectOption> {
        self.store.with(|s| s.options())
    }

    pub fn selection(&self) -> Selection<T> {
        self.store.with(|s| s.current_selection().clone())
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.store.with(|s| s.current_selection().ids())
    }

    /// Selected entity in single mode.
    pub fn selected(&self) -> Option<T> {
        self.store
            .with(|s| s.current_selection().single().cloned())
    }

    pub fn selection_untracked(&self) -> Selection<T> {
        self.store
            .with_untracked(|s| s.current_selection().clone())
    }

    /// Resolve ids against the current collection. Subscribers are only
    /// notified when the selected ids actually change.
    pub fn select_by_id(&self, request: impl Into<SelectionRequest>) {
        let request = request.into();
        self.store.maybe_update(|s| s.select_by_id(request));
    }
}

/// Создать выбор сущностей `kind`, перезагружаемый при смене `is_demo`
pub fn use_remote_selection<T>(
    kind: ResourceKind,
    is_demo: Signal<bool>,
    mode: SelectionMode,
) -> RemoteSelection<T>
where
    T: SelectableEntity + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let store = RwSignal::new(RemoteSelectionStore::<T>::new(mode));

    Effect::new(move |_| {
        let key = LoadKey::new(kind, is_demo.get());
        let ticket = store
            .try_update(|s| s.begin_load_if_changed(key))
            .flatten();

        if let Some(ticket) = ticket {
            spawn_local(async move {
                let result = ResourceFetcher::<T>::fetch(&GlooFetcher, &ticket.path()).await;
                store.update(move |s| {
                    s.settle(ticket, result);
                });
            });
        }
    });

    RemoteSelection { store }
}
