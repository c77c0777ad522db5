// tests/support/mocks.rs
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use haven_core::application::{
    ApplicationResult, error::ApplicationError, ports::source::ArticleSource,
};
use haven_core::domain::article::ArticleStore;

/// Hands out a prepared store once, optionally after a delay.
pub struct StaticSource {
    store: Mutex<Option<ArticleStore>>,
    delay: Duration,
}

impl StaticSource {
    pub fn new(store: ArticleStore) -> Self {
        Self {
            store: Mutex::new(Some(store)),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(store: ArticleStore, delay: Duration) -> Self {
        Self {
            store: Mutex::new(Some(store)),
            delay,
        }
    }
}

#[async_trait]
impl ArticleSource for StaticSource {
    async fn load(&self) -> ApplicationResult<ArticleStore> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.store
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| ApplicationError::infrastructure("store already taken"))
    }
}
