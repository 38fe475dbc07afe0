//! Remote selection
//!
//! Turns a "list resources of a kind" endpoint into a selector: the store
//! fetches a collection, offers it as options, and keeps a selection that only
//! ever points at entities of the latest collection.
//!
//! ## Использование
//!
//! ```ignore
//! let mut store = RemoteSelectionStore::<Part>::new(SelectionMode::Multiple);
//! store.load(&fetcher, LoadKey::new(ResourceKind::Parts, false)).await;
//! store.select_by_id(vec![3, 1]);
//! ```
//!
//! Hosts that cannot hold `&mut` across the fetch (reactive UIs) split the
//! call into `begin_load` and `settle`; the ticket returned by `begin_load`
//! carries the sequence number that decides whether a late result still
//! applies.

pub mod fetcher;
pub mod resource;
pub mod selection;
pub mod store;

pub use fetcher::{FetchError, ResourceFetcher};
pub use resource::{LoadKey, ResourceKind};
pub use selection::{
    derive_selection, initial_selection, options_for, SelectOption, Selection, SelectionMode,
    SelectionRequest,
};
pub use store::{LoadTicket, RemoteSelectionStore, SettleOutcome};
