use std::collections::HashMap;
use std::sync::Arc;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{source::ArticleSource, util::SlugGenerator},
};
use crate::domain::article::{ArticleId, ArticleStore};

/// Loads the store from its source and refuses data whose titles cannot be
/// told apart by slug.
pub struct StoreLoader {
    source: Arc<dyn ArticleSource>,
    slugger: Arc<dyn SlugGenerator>,
}

impl StoreLoader {
    pub fn new(source: Arc<dyn ArticleSource>, slugger: Arc<dyn SlugGenerator>) -> Self {
        Self { source, slugger }
    }

    pub async fn load(&self) -> ApplicationResult<ArticleStore> {
        let store = self.source.load().await?;
        self.ensure_unique_slugs(&store)?;
        tracing::info!(
            articles = store.len(),
            categories = store.catalog().len(),
            "article store loaded"
        );
        Ok(store)
    }

    pub fn ensure_unique_slugs(&self, store: &ArticleStore) -> ApplicationResult<()> {
        let mut seen: HashMap<String, ArticleId> = HashMap::with_capacity(store.len());
        for article in store.articles() {
            let slug = self.slugger.slugify(article.title.as_str());
            if slug.is_empty() {
                return Err(ApplicationError::validation(format!(
                    "title of article {} produces an empty slug",
                    article.id
                )));
            }
            if let Some(existing) = seen.insert(slug.clone(), article.id) {
                return Err(ApplicationError::conflict(format!(
                    "articles {existing} and {} share the slug `{slug}`",
                    article.id
                )));
            }
        }
        Ok(())
    }
}
