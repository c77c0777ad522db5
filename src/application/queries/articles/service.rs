use std::sync::Arc;

use crate::application::{browse::Paginator, ports::util::SlugGenerator, render::ViewRenderer};

pub struct ArticleQueryService {
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) renderer: ViewRenderer,
    pub(super) paginator: Paginator,
}

impl ArticleQueryService {
    pub fn new(
        slugger: Arc<dyn SlugGenerator>,
        paginator: Paginator,
        site_name: impl Into<String>,
    ) -> Self {
        let renderer = ViewRenderer::new(Arc::clone(&slugger), site_name);
        Self {
            slugger,
            renderer,
            paginator,
        }
    }
}
