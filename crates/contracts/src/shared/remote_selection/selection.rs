use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateId, SelectableEntity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionMode {
    Single,
    Multiple,
}

/// Текущий выбор: форма зависит от режима
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<T> {
    Single(Option<T>),
    Multiple(Vec<T>),
}

impl<T> Selection<T> {
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Selection::Single(None),
            SelectionMode::Multiple => Selection::Multiple(Vec::new()),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Single(_) => SelectionMode::Single,
            Selection::Multiple(_) => SelectionMode::Multiple,
        }
    }

    /// The selected entity in single mode.
    pub fn single(&self) -> Option<&T> {
        match self {
            Selection::Single(item) => item.as_ref(),
            Selection::Multiple(_) => None,
        }
    }

    /// Selected entities regardless of mode, in selection order.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Selection::Single(Some(item)) => std::slice::from_ref(item),
            Selection::Single(None) => &[],
            Selection::Multiple(items) => items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T: SelectableEntity> Selection<T> {
    pub fn ids(&self) -> Vec<String> {
        self.as_slice().iter().map(|e| e.id_key()).collect()
    }
}

/// Ids requested by the view, already normalized to strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionRequest {
    One(String),
    Many(Vec<String>),
}

impl SelectionRequest {
    pub fn ids(&self) -> &[String] {
        match self {
            SelectionRequest::One(id) => std::slice::from_ref(id),
            SelectionRequest::Many(ids) => ids,
        }
    }
}

impl From<i64> for SelectionRequest {
    fn from(id: i64) -> Self {
        SelectionRequest::One(id.as_string())
    }
}

impl From<&str> for SelectionRequest {
    fn from(id: &str) -> Self {
        SelectionRequest::One(id.to_string())
    }
}

impl From<String> for SelectionRequest {
    fn from(id: String) -> Self {
        SelectionRequest::One(id)
    }
}

impl From<Vec<i64>> for SelectionRequest {
    fn from(ids: Vec<i64>) -> Self {
        SelectionRequest::Many(ids.iter().map(AggregateId::as_string).collect())
    }
}

impl From<&[i64]> for SelectionRequest {
    fn from(ids: &[i64]) -> Self {
        SelectionRequest::Many(ids.iter().map(AggregateId::as_string).collect())
    }
}

impl From<Vec<String>> for SelectionRequest {
    fn from(ids: Vec<String>) -> Self {
        SelectionRequest::Many(ids)
    }
}

impl From<Vec<&str>> for SelectionRequest {
    fn from(ids: Vec<&str>) -> Self {
        SelectionRequest::Many(ids.into_iter().map(String::from).collect())
    }
}

/// Элемент выпадающего списка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub key: String,
    pub header: String,
}

impl SelectOption {
    pub fn from_entity<T: SelectableEntity>(entity: &T) -> Self {
        Self {
            key: entity.id_key(),
            header: entity.display_name(),
        }
    }
}

pub fn options_for<T: SelectableEntity>(collection: &[T]) -> Vec<SelectOption> {
    collection.iter().map(SelectOption::from_entity).collect()
}

/// Selection right after a collection arrives: the first entity in single
/// mode, the whole collection (fetch order) in multiple mode.
pub fn initial_selection<T: Clone>(collection: &[T], mode: SelectionMode) -> Selection<T> {
    match mode {
        SelectionMode::Single => Selection::Single(collection.first().cloned()),
        SelectionMode::Multiple => Selection::Multiple(collection.to_vec()),
    }
}

/// Resolve requested ids against `collection`.
///
/// Returns `None` when the current selection must stay as it is: in single
/// mode that is the case when no requested id matches. In multiple mode the
/// result follows the request order, unmatched ids are skipped and repeated
/// ids count once, so the result is always `Some`.
pub fn derive_selection<T>(
    collection: &[T],
    request: &SelectionRequest,
    mode: SelectionMode,
) -> Option<Selection<T>>
where
    T: SelectableEntity + Clone,
{
    let find = |key: &str| collection.iter().find(|e| e.id_key() == key);

    match mode {
        SelectionMode::Single => request
            .ids()
            .iter()
            .find_map(|id| find(id.as_str()))
            .map(|e| Selection::Single(Some(e.clone()))),
        SelectionMode::Multiple => {
            let mut seen: Vec<&str> = Vec::new();
            let mut picked = Vec::new();
            for id in request.ids() {
                if seen.contains(&id.as_str()) {
                    continue;
                }
                if let Some(e) = find(id.as_str()) {
                    seen.push(id.as_str());
                    picked.push(e.clone());
                }
            }
            Some(Selection::Multiple(picked))
        }
    }
}
