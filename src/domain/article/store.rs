// src/domain/article/store.rs
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::article::category::CategoryCatalog;
use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};

/// Ordered, read-only set of articles plus the catalog that labels them.
#[derive(Debug, Clone, Default)]
pub struct ArticleStore {
    catalog: CategoryCatalog,
    articles: Vec<Arc<Article>>,
}

impl ArticleStore {
    pub fn new(catalog: CategoryCatalog, articles: Vec<Article>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(articles.len());
        for article in &articles {
            if !seen.insert(article.id) {
                return Err(DomainError::Conflict(format!(
                    "article id {} appears more than once",
                    article.id
                )));
            }
            if !catalog.contains(&article.category) {
                return Err(DomainError::MissingLookupKey(format!(
                    "category `{}` used by article {} has no display name",
                    article.category, article.id
                )));
            }
        }

        Ok(Self {
            catalog,
            articles: articles.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn articles(&self) -> &[Arc<Article>] {
        &self.articles
    }

    pub fn find_by_id(&self, id: ArticleId) -> Option<&Arc<Article>> {
        self.articles.iter().find(|article| article.id == id)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
