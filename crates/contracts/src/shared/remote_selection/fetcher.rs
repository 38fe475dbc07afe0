use async_trait::async_trait;
use thiserror::Error;

/// Failure while loading a collection.
///
/// There is one failure kind as far as the store is concerned; the variants
/// only exist so the log line says what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Источник коллекций для `RemoteSelectionStore`
///
/// `path` is what `LoadKey::list_path` produced; implementations prepend
/// their own base url. Futures are not required to be `Send` so browser
/// fetches can implement this directly.
#[async_trait(?Send)]
pub trait ResourceFetcher<T> {
    async fn fetch(&self, path: &str) -> Result<Vec<T>, FetchError>;
}
