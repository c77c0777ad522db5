// src/application/services/mod.rs
mod store_loader;

pub use store_loader::StoreLoader;

use std::sync::Arc;

use crate::application::{
    browse::Paginator,
    ports::{source::ArticleSource, util::SlugGenerator},
    queries::articles::ArticleQueryService,
};

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
    pub store_loader: Arc<StoreLoader>,
}

impl ApplicationServices {
    pub fn new(
        source: Arc<dyn ArticleSource>,
        slugger: Arc<dyn SlugGenerator>,
        paginator: Paginator,
        site_name: impl Into<String>,
    ) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&slugger),
            paginator,
            site_name,
        ));
        let store_loader = Arc::new(StoreLoader::new(source, slugger));

        Self {
            article_queries,
            store_loader,
        }
    }
}
