// src/application/ports/source.rs
use crate::application::ApplicationResult;
use crate::domain::article::ArticleStore;
use async_trait::async_trait;

/// Where the article data comes from. Loading may finish long after the
/// process starts serving.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn load(&self) -> ApplicationResult<ArticleStore>;
}
