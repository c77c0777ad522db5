use super::ArticleQueryService;
use crate::{
    application::{browse::BrowseSession, dto::ListingView, error::ApplicationResult},
    domain::article::{ArticleStore, CategoryFilter},
};

/// One listing request: the inputs replayed onto a fresh session in the
/// order a visitor produces them (filter, search, page).
#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    /// Raw page input; see [`requested_page`].
    pub page: Option<String>,
}

/// Anything that is not a non-negative integer falls back to the first page.
/// Numbers past the end are kept and render as an empty slice.
pub fn requested_page(raw: &str) -> usize {
    raw.trim().parse::<usize>().unwrap_or(1)
}

impl ArticleQueryService {
    pub fn list_articles(
        &self,
        store: &ArticleStore,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ListingView> {
        let mut session = BrowseSession::new(store);
        if let Some(category) = query.category.as_deref() {
            session.set_category(store, CategoryFilter::parse(category));
        }
        if let Some(search) = query.search.as_deref() {
            session.set_search_term(store, search);
        }
        if let Some(page) = query.page.as_deref() {
            session.set_page(requested_page(page));
        }

        self.renderer.render_listing(store, &session, &self.paginator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_pages_pass_through() {
        assert_eq!(requested_page("3"), 3);
        assert_eq!(requested_page(" 2 "), 2);
        assert_eq!(requested_page("40"), 40);
    }

    #[test]
    fn unusable_page_input_means_first_page() {
        for raw in ["", "   ", "abc", "-1", "2.5"] {
            assert_eq!(requested_page(raw), 1, "input {raw:?}");
        }
    }
}
