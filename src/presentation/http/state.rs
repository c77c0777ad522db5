// src/presentation/http/state.rs
use crate::application::{
    ApplicationResult, services::ApplicationServices,
};
use crate::domain::article::ArticleStore;
use crate::infrastructure::readiness::StoreHandle;
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub store: StoreHandle,
    pub store_ready_timeout: Duration,
}

impl HttpState {
    /// Waits (bounded) for the article store before a request touches it.
    pub async fn ready_store(&self) -> ApplicationResult<Arc<ArticleStore>> {
        self.store.wait_ready(self.store_ready_timeout).await
    }
}
