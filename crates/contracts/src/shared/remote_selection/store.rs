use super::fetcher::{FetchError, ResourceFetcher};
use super::resource::LoadKey;
use super::selection::{
    derive_selection, initial_selection, options_for, SelectOption, Selection, SelectionMode,
    SelectionRequest,
};
use crate::domain::common::SelectableEntity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Idle,
    Loading,
}

/// Handle for one issued fetch. Consumed by `settle`, so a fetch settles once.
#[derive(Debug, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    key: LoadKey,
}

impl LoadTicket {
    pub fn path(&self) -> String {
        self.key.list_path()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// Collection replaced, selection re-derived.
    Applied,
    /// Fetch failed; previous collection and selection kept.
    Failed,
    /// A newer load was started after this one; result dropped.
    Stale,
}

/// Коллекция сущностей одного вида и выбор внутри неё
///
/// Owns one collection, one selection and one loading flag. The selection
/// is always a subset of the collection currently held: it is re-derived
/// whenever a collection is applied and changed only through
/// `select_by_id`, which resolves ids against that same collection.
#[derive(Debug, Clone)]
pub struct RemoteSelectionStore<T> {
    mode: SelectionMode,
    collection: Vec<T>,
    selection: Selection<T>,
    state: LoadState,
    requested_key: Option<LoadKey>,
    loaded_key: Option<LoadKey>,
    last_seq: u64,
}

impl<T> RemoteSelectionStore<T>
where
    T: SelectableEntity + Clone,
{
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            collection: Vec::new(),
            selection: Selection::empty(mode),
            state: LoadState::Idle,
            requested_key: None,
            loaded_key: None,
            last_seq: 0,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn collection(&self) -> &[T] {
        &self.collection
    }

    pub fn current_selection(&self) -> &Selection<T> {
        &self.selection
    }

    pub fn options(&self) -> Vec<SelectOption> {
        options_for(&self.collection)
    }

    /// Key the current collection was fetched for.
    pub fn loaded_key(&self) -> Option<LoadKey> {
        self.loaded_key
    }

    /// Start a load for `key`. Any load still in flight becomes stale.
    pub fn begin_load(&mut self, key: LoadKey) -> LoadTicket {
        self.last_seq += 1;
        self.requested_key = Some(key);
        self.state = LoadState::Loading;
        log::debug!("loading {} (request #{})", key, self.last_seq);
        LoadTicket {
            seq: self.last_seq,
            key,
        }
    }

    /// Start a load only when `key` differs from the last requested one.
    pub fn begin_load_if_changed(&mut self, key: LoadKey) -> Option<LoadTicket> {
        if self.requested_key == Some(key) {
            return None;
        }
        Some(self.begin_load(key))
    }

    /// Apply the outcome of a fetch started with `ticket`.
    ///
    /// Only the latest ticket touches the store. For it the loading flag is
    /// cleared whatever the result; a failure is logged and otherwise
    /// absorbed.
    pub fn settle(&mut self, ticket: LoadTicket, result: Result<Vec<T>, FetchError>) -> SettleOutcome {
        if ticket.seq != self.last_seq {
            log::debug!(
                "dropping result of request #{} for {}: request #{} is newer",
                ticket.seq,
                ticket.key,
                self.last_seq
            );
            return SettleOutcome::Stale;
        }

        self.state = LoadState::Idle;
        match result {
            Ok(items) => {
                self.selection = initial_selection(&items, self.mode);
                self.collection = items;
                self.loaded_key = Some(ticket.key);
                SettleOutcome::Applied
            }
            Err(err) => {
                log::error!("Failed to load {}: {}", ticket.key, err);
                SettleOutcome::Failed
            }
        }
    }

    /// Fetch the collection for `key` and settle it. Returns the collection
    /// held afterwards, which is the previous one if the fetch failed.
    pub async fn load<F>(&mut self, fetcher: &F, key: LoadKey) -> &[T]
    where
        F: ResourceFetcher<T> + ?Sized,
    {
        let ticket = self.begin_load(key);
        let result = fetcher.fetch(&ticket.path()).await;
        self.settle(ticket, result);
        &self.collection
    }

    /// Replace the selection with the entities matching `request`.
    ///
    /// In single mode an id with no match leaves the selection untouched.
    /// Returns whether the selected ids changed.
    pub fn select_by_id(&mut self, request: impl Into<SelectionRequest>) -> bool {
        let request = request.into();
        match derive_selection(&self.collection, &request, self.mode) {
            Some(next) => {
                let changed = next.ids() != self.selection.ids();
                self.selection = next;
                changed
            }
            None => {
                log::debug!("no entity matches {:?}, selection kept", request.ids());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::remote_selection::resource::ResourceKind;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        name: String,
    }

    impl SelectableEntity for Item {
        fn id_key(&self) -> String {
            self.id.to_string()
        }

        fn display_name(&self) -> String {
            self.name.clone()
        }
    }

    fn item(id: i64, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
        }
    }

    fn ab() -> Vec<Item> {
        vec![item(1, "A"), item(2, "B")]
    }

    /// Returns scripted responses in order and records requested paths.
    struct ScriptedFetcher {
        responses: RefCell<VecDeque<Result<Vec<Item>, FetchError>>>,
        paths: RefCell<Vec<String>>,
    }

    impl ScriptedFetcher {
        fn new(responses: Vec<Result<Vec<Item>, FetchError>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                paths: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ResourceFetcher<Item> for ScriptedFetcher {
        async fn fetch(&self, path: &str) -> Result<Vec<Item>, FetchError> {
            self.paths.borrow_mut().push(path.to_string());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Network("no scripted response".into())))
        }
    }

    fn parts(is_demo: bool) -> LoadKey {
        LoadKey::new(ResourceKind::Parts, is_demo)
    }

    fn single_store_with(items: Vec<Item>) -> RemoteSelectionStore<Item> {
        let mut store = RemoteSelectionStore::new(SelectionMode::Single);
        let ticket = store.begin_load(parts(false));
        store.settle(ticket, Ok(items));
        store
    }

    #[test]
    fn test_new_store_is_idle_and_empty() {
        let store: RemoteSelectionStore<Item> = RemoteSelectionStore::new(SelectionMode::Multiple);
        assert!(!store.is_loading());
        assert!(store.collection().is_empty());
        assert_eq!(store.current_selection(), &Selection::Multiple(Vec::new()));
        assert_eq!(store.loaded_key(), None);
    }

    #[test]
    fn test_single_mode_replace_semantics() {
        let mut store = single_store_with(ab());
        assert_eq!(store.current_selection().single(), Some(&item(1, "A")));

        assert!(store.select_by_id(2));
        assert_eq!(store.current_selection().single(), Some(&item(2, "B")));

        assert!(!store.select_by_id(99));
        assert_eq!(store.current_selection().single(), Some(&item(2, "B")));
    }

    #[test]
    fn test_multiple_mode_order_by_input() {
        let mut store = RemoteSelectionStore::new(SelectionMode::Multiple);
        let ticket = store.begin_load(parts(false));
        store.settle(ticket, Ok(vec![item(1, "A"), item(2, "B"), item(3, "C")]));

        store.select_by_id(vec![3, 1]);
        assert_eq!(
            store.current_selection(),
            &Selection::Multiple(vec![item(3, "C"), item(1, "A")])
        );

        store.select_by_id(vec!["2", "404"]);
        assert_eq!(store.current_selection().ids(), vec!["2".to_string()]);
    }

    #[test]
    fn test_multiple_mode_can_be_cleared() {
        let mut store = RemoteSelectionStore::new(SelectionMode::Multiple);
        let ticket = store.begin_load(parts(false));
        store.settle(ticket, Ok(ab()));
        store.select_by_id(vec!["2"]);

        assert!(store.select_by_id(Vec::<String>::new()));
        assert_eq!(store.current_selection(), &Selection::Multiple(Vec::new()));
        assert!(!store.select_by_id(Vec::<String>::new()));
    }

    #[test]
    fn test_initial_selection_after_load() {
        let single = single_store_with(ab());
        assert_eq!(single.current_selection(), &Selection::Single(Some(item(1, "A"))));

        let mut multiple = RemoteSelectionStore::new(SelectionMode::Multiple);
        let ticket = multiple.begin_load(parts(false));
        multiple.settle(ticket, Ok(ab()));
        assert_eq!(multiple.current_selection(), &Selection::Multiple(ab()));
    }

    #[test]
    fn test_empty_collection_clears_selection() {
        let mut store = single_store_with(ab());
        let ticket = store.begin_load(parts(true));
        store.settle(ticket, Ok(Vec::new()));
        assert_eq!(store.current_selection(), &Selection::Single(None));
    }

    #[test]
    fn test_loading_flag_settles_on_success_and_failure() {
        let mut store: RemoteSelectionStore<Item> = RemoteSelectionStore::new(SelectionMode::Single);

        let ticket = store.begin_load(parts(false));
        assert!(store.is_loading());
        assert_eq!(store.settle(ticket, Ok(ab())), SettleOutcome::Applied);
        assert!(!store.is_loading());

        let ticket = store.begin_load(parts(true));
        assert!(store.is_loading());
        assert_eq!(
            store.settle(ticket, Err(FetchError::Status(500))),
            SettleOutcome::Failed
        );
        assert!(!store.is_loading());
    }

    #[test]
    fn test_failure_preserves_prior_state() {
        let mut store = single_store_with(ab());
        store.select_by_id(2);

        let ticket = store.begin_load(parts(true));
        store.settle(ticket, Err(FetchError::Network("connection refused".into())));

        assert_eq!(store.collection(), ab().as_slice());
        assert_eq!(store.current_selection().single(), Some(&item(2, "B")));
        assert_eq!(store.loaded_key(), Some(parts(false)));
        assert!(!store.is_loading());
    }

    #[test]
    fn test_rekey_replaces_instead_of_merging() {
        let mut store = RemoteSelectionStore::new(SelectionMode::Multiple);
        let ticket = store.begin_load(parts(false));
        store.settle(ticket, Ok(ab()));

        let ticket = store.begin_load(parts(true));
        store.settle(ticket, Ok(vec![item(10, "Demo")]));

        assert_eq!(store.collection(), &[item(10, "Demo")]);
        assert_eq!(store.current_selection().ids(), vec!["10".to_string()]);
        assert_eq!(store.loaded_key(), Some(parts(true)));

        // ids of the old collection no longer resolve
        store.select_by_id(vec![1, 2]);
        assert!(store.current_selection().is_empty());
    }

    #[test]
    fn test_stale_result_is_ignored_when_newer_pending() {
        let mut store: RemoteSelectionStore<Item> = RemoteSelectionStore::new(SelectionMode::Single);
        let first = store.begin_load(parts(false));
        let second = store.begin_load(parts(true));

        assert_eq!(store.settle(first, Ok(ab())), SettleOutcome::Stale);
        assert!(store.is_loading());
        assert!(store.collection().is_empty());

        assert_eq!(
            store.settle(second, Ok(vec![item(5, "E")])),
            SettleOutcome::Applied
        );
        assert!(!store.is_loading());
        assert_eq!(store.collection(), &[item(5, "E")]);
    }

    #[test]
    fn test_stale_result_is_ignored_after_newer_settled() {
        let mut store: RemoteSelectionStore<Item> = RemoteSelectionStore::new(SelectionMode::Single);
        let first = store.begin_load(parts(false));
        let second = store.begin_load(parts(true));

        store.settle(second, Ok(vec![item(5, "E")]));
        assert_eq!(store.settle(first, Ok(ab())), SettleOutcome::Stale);

        assert_eq!(store.collection(), &[item(5, "E")]);
        assert_eq!(store.loaded_key(), Some(parts(true)));
        assert!(!store.is_loading());
    }

    #[test]
    fn test_stale_failure_does_not_clear_loading() {
        let mut store: RemoteSelectionStore<Item> = RemoteSelectionStore::new(SelectionMode::Single);
        let first = store.begin_load(parts(false));
        let second = store.begin_load(parts(true));

        store.settle(first, Err(FetchError::Status(502)));
        assert!(store.is_loading());
        store.settle(second, Err(FetchError::Status(502)));
        assert!(!store.is_loading());
    }

    #[test]
    fn test_begin_load_if_changed_issues_once_per_key() {
        let mut store: RemoteSelectionStore<Item> = RemoteSelectionStore::new(SelectionMode::Single);
        let ticket = store.begin_load_if_changed(parts(false)).expect("first key loads");
        assert!(store.begin_load_if_changed(parts(false)).is_none());
        store.settle(ticket, Ok(ab()));
        assert!(store.begin_load_if_changed(parts(false)).is_none());
        assert!(store.begin_load_if_changed(parts(true)).is_some());
    }

    #[test]
    fn test_selection_stays_within_collection() {
        let mut store = RemoteSelectionStore::new(SelectionMode::Multiple);
        let mut single = RemoteSelectionStore::new(SelectionMode::Single);
        let mut seed: u64 = 0x2545_f491;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed
        };

        for round in 0..200 {
            if round % 20 == 0 {
                let len = (next() % 6) as i64;
                let items: Vec<Item> = (0..len)
                    .map(|i| item(i * 3 + (round as i64 % 4), "x"))
                    .collect();
                let t = store.begin_load(parts(round % 40 == 0));
                store.settle(t, Ok(items.clone()));
                let t = single.begin_load(parts(round % 40 == 0));
                single.settle(t, Ok(items));
            }

            let ids: Vec<i64> = (0..(next() % 4)).map(|_| (next() % 20) as i64).collect();
            store.select_by_id(ids.clone());
            if let Some(first) = ids.first() {
                single.select_by_id(*first);
            }

            for s in [&store, &single] {
                let keys: Vec<String> = s.collection().iter().map(|e| e.id_key()).collect();
                for id in s.current_selection().ids() {
                    assert!(keys.contains(&id), "selected {} not in collection", id);
                }
            }
        }
    }

    #[tokio::test]
    async fn test_load_uses_list_path_and_applies() {
        let fetcher = ScriptedFetcher::new(vec![Ok(ab())]);
        let mut store = RemoteSelectionStore::new(SelectionMode::Single);

        let loaded = store.load(&fetcher, parts(true)).await.to_vec();

        assert_eq!(loaded, ab());
        assert_eq!(fetcher.paths.borrow().as_slice(), ["/api/parts/?is_demo=1"]);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_load_demo_cameras_without_filter() {
        let fetcher = ScriptedFetcher::new(vec![Ok(ab()), Ok(ab())]);
        let mut store = RemoteSelectionStore::new(SelectionMode::Single);

        store
            .load(&fetcher, LoadKey::new(ResourceKind::Cameras, true))
            .await;
        store
            .load(&fetcher, LoadKey::new(ResourceKind::Cameras, false))
            .await;

        assert_eq!(
            fetcher.paths.borrow().as_slice(),
            ["/api/cameras/", "/api/cameras/?is_demo=0"]
        );
    }

    #[tokio::test]
    async fn test_load_failure_keeps_previous_collection() {
        let fetcher = ScriptedFetcher::new(vec![Ok(ab()), Err(FetchError::Status(503))]);
        let mut store = RemoteSelectionStore::new(SelectionMode::Multiple);

        store.load(&fetcher, parts(false)).await;
        store.select_by_id(vec![2]);
        let after_failure = store.load(&fetcher, parts(true)).await.to_vec();

        assert_eq!(after_failure, ab());
        assert_eq!(store.current_selection().ids(), vec!["2".to_string()]);
        assert!(!store.is_loading());
    }
}
