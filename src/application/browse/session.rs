use std::sync::Arc;

use crate::application::browse::pagination::Paginator;
use crate::application::dto::PageControlsView;
use crate::domain::article::{Article, ArticleStore, BrowseSpec, CategoryFilter, SearchTerm};

/// Browsing state for one visitor: active filter, search term, the articles
/// matching both, and the current page.
///
/// Every predicate change re-filters the full store, never the previous
/// result, and resets the page to 1. The store is passed in on each call so
/// a store that finished loading in the meantime is always picked up; a
/// missing store is simply an empty one.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    selected_category: CategoryFilter,
    search_term: SearchTerm,
    filtered: Vec<Arc<Article>>,
    current_page: usize,
}

impl BrowseSession {
    pub fn new(store: &ArticleStore) -> Self {
        let mut session = Self {
            selected_category: CategoryFilter::All,
            search_term: SearchTerm::default(),
            filtered: Vec::new(),
            current_page: 1,
        };
        session.recompute(store);
        session
    }

    pub fn set_category(&mut self, store: &ArticleStore, category: CategoryFilter) {
        self.selected_category = category;
        self.recompute(store);
    }

    pub fn set_search_term(&mut self, store: &ArticleStore, raw_query: &str) {
        self.search_term = SearchTerm::normalize(raw_query);
        self.recompute(store);
    }

    /// Pages are not checked against the result size here; `page_slice`
    /// handles out-of-range pages.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.selected_category
    }

    pub fn search_term(&self) -> &SearchTerm {
        &self.search_term
    }

    pub fn filtered_articles(&self) -> &[Arc<Article>] {
        &self.filtered
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self, paginator: &Paginator) -> usize {
        paginator.page_count(self.filtered.len())
    }

    pub fn page_slice(&self, paginator: &Paginator) -> &[Arc<Article>] {
        paginator.page_slice(&self.filtered, self.current_page)
    }

    pub fn page_controls(&self, paginator: &Paginator) -> Option<PageControlsView> {
        super::pagination::page_controls(self.current_page, self.page_count(paginator))
    }

    fn recompute(&mut self, store: &ArticleStore) {
        self.filtered = store
            .articles()
            .iter()
            .filter(|article| {
                BrowseSpec::new(&self.selected_category, &self.search_term, article).is_satisfied()
            })
            .cloned()
            .collect();
        self.current_page = 1;

        tracing::debug!(
            category = %self.selected_category,
            search = %self.search_term,
            matched = self.filtered.len(),
            total = store.len(),
            "recomputed filtered articles"
        );
    }
}
