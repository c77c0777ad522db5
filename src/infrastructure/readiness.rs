// src/infrastructure/readiness.rs
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::article::ArticleStore;

/// Shared view of the article store that may still be loading.
///
/// Starts not ready; `publish` flips it to ready once. Readers either take
/// a `snapshot` (an empty store until loaded) or `wait_ready` with a bound.
#[derive(Clone)]
pub struct StoreHandle {
    sender: Arc<watch::Sender<Option<Arc<ArticleStore>>>>,
}

impl Default for StoreHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreHandle {
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn ready(store: ArticleStore) -> Self {
        let handle = Self::new();
        handle.publish(store);
        handle
    }

    pub fn publish(&self, store: ArticleStore) {
        self.sender.send_replace(Some(Arc::new(store)));
    }

    pub fn snapshot(&self) -> Arc<ArticleStore> {
        self.sender
            .borrow()
            .clone()
            .unwrap_or_else(|| Arc::new(ArticleStore::empty()))
    }

    pub async fn wait_ready(&self, timeout: Duration) -> ApplicationResult<Arc<ArticleStore>> {
        let mut receiver = self.sender.subscribe();
        let waited = tokio::time::timeout(timeout, receiver.wait_for(Option::is_some)).await;

        match waited {
            Ok(Ok(store)) => store
                .clone()
                .ok_or_else(|| ApplicationError::not_ready("article store is not loaded")),
            Ok(Err(_)) => Err(ApplicationError::not_ready("article store loader went away")),
            Err(_) => {
                tracing::warn!(
                    timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                    "article store not ready in time"
                );
                Err(ApplicationError::not_ready(
                    "article store is still loading",
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_before_publish_is_empty() {
        let handle = StoreHandle::new();
        assert!(handle.snapshot().is_empty());
    }

    #[tokio::test]
    async fn wait_ready_times_out_while_loading() {
        let handle = StoreHandle::new();
        let err = handle.wait_ready(Duration::from_millis(20)).await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotReady(_)));
    }

    #[tokio::test]
    async fn wait_ready_resolves_once_published() {
        let handle = StoreHandle::new();
        let publisher = handle.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            publisher.publish(ArticleStore::empty());
        });

        let store = handle.wait_ready(Duration::from_secs(2)).await.unwrap();
        assert!(store.is_empty());
    }
}
