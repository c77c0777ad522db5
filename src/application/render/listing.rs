use std::sync::Arc;

use super::{ALL_FILTER_LABEL, NO_RESULTS_HEADING, NO_RESULTS_MESSAGE, ViewRenderer, format_date};
use crate::application::browse::{BrowseSession, Paginator};
use crate::application::dto::{ArticleCardView, FilterButtonView, ListingContent, ListingView};
use crate::application::error::ApplicationResult;
use crate::application::navigation::article_href;
use crate::domain::article::{ALL_CATEGORIES, Article, ArticleStore, CategoryCatalog, CategoryFilter};

impl ViewRenderer {
    pub fn render_card(
        &self,
        catalog: &CategoryCatalog,
        article: &Article,
    ) -> ApplicationResult<ArticleCardView> {
        let slug = self.slugger.slugify(article.title.as_str());
        Ok(ArticleCardView {
            href: article_href(&slug),
            slug,
            image: article.image.clone(),
            image_alt: article.title.to_string(),
            category: catalog.display_name(&article.category)?.to_string(),
            title: article.title.to_string(),
            excerpt: article.excerpt.clone(),
            date: format_date(article.date),
        })
    }

    /// An empty result set becomes the "no articles found" state. An empty
    /// slice of a non-empty set (page past the end) stays an empty card list.
    pub fn render_listing_content(
        &self,
        catalog: &CategoryCatalog,
        filtered: &[Arc<Article>],
        page_slice: &[Arc<Article>],
    ) -> ApplicationResult<ListingContent> {
        if filtered.is_empty() {
            return Ok(ListingContent::NoResults {
                heading: NO_RESULTS_HEADING.into(),
                message: NO_RESULTS_MESSAGE.into(),
            });
        }

        let cards = page_slice
            .iter()
            .map(|article| self.render_card(catalog, article))
            .collect::<ApplicationResult<Vec<_>>>()?;
        Ok(ListingContent::Cards { cards })
    }

    pub fn render_filters(
        &self,
        catalog: &CategoryCatalog,
        selected: &CategoryFilter,
    ) -> Vec<FilterButtonView> {
        let all = FilterButtonView {
            category: ALL_CATEGORIES.into(),
            label: ALL_FILTER_LABEL.into(),
            active: *selected == CategoryFilter::All,
        };
        std::iter::once(all)
            .chain(catalog.iter().map(|entry| FilterButtonView {
                category: entry.key.to_string(),
                label: entry.name.clone(),
                active: selected.key() == Some(&entry.key),
            }))
            .collect()
    }

    pub fn render_listing(
        &self,
        store: &ArticleStore,
        session: &BrowseSession,
        paginator: &Paginator,
    ) -> ApplicationResult<ListingView> {
        let catalog = store.catalog();
        let content = self.render_listing_content(
            catalog,
            session.filtered_articles(),
            session.page_slice(paginator),
        )?;

        Ok(ListingView {
            category: session.selected_category().to_string(),
            search: session.search_term().to_string(),
            current_page: session.current_page(),
            total_pages: session.page_count(paginator),
            total_results: session.filtered_articles().len(),
            filters: self.render_filters(catalog, session.selected_category()),
            content,
            pagination: session.page_controls(paginator),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::util::SlugGenerator;
    use crate::domain::article::{ArticleId, ArticleTitle, CategoryEntry, CategoryKey};
    use chrono::NaiveDate;

    struct DashSlug;

    impl SlugGenerator for DashSlug {
        fn slugify(&self, input: &str) -> String {
            input.to_lowercase().replace(' ', "-")
        }
    }

    fn renderer() -> ViewRenderer {
        ViewRenderer::new(Arc::new(DashSlug), "EverydayHaven")
    }

    fn catalog() -> CategoryCatalog {
        CategoryCatalog::new(vec![CategoryEntry {
            key: CategoryKey::new("office").unwrap(),
            name: "Home Office".into(),
        }])
        .unwrap()
    }

    fn article(category: &str) -> Arc<Article> {
        Arc::new(Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("Desk Setup").unwrap(),
            category: CategoryKey::new(category).unwrap(),
            excerpt: "Tidy cables".into(),
            content: String::new(),
            date: NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
            author: "Ada".into(),
            image: "images/desk.jpg".into(),
            products: Vec::new(),
        })
    }

    #[test]
    fn card_carries_display_values() {
        let card = renderer().render_card(&catalog(), &article("office")).unwrap();
        assert_eq!(card.slug, "desk-setup");
        assert_eq!(card.href, "article.html?name=desk-setup");
        assert_eq!(card.category, "Home Office");
        assert_eq!(card.date, "July 4, 2025");
        assert_eq!(card.image_alt, "Desk Setup");
    }

    #[test]
    fn card_with_unknown_category_is_an_error() {
        let err = renderer().render_card(&catalog(), &article("garden"));
        assert!(err.is_err());
    }

    #[test]
    fn empty_result_set_renders_no_results() {
        let content = renderer().render_listing_content(&catalog(), &[], &[]).unwrap();
        assert_eq!(
            content,
            ListingContent::NoResults {
                heading: NO_RESULTS_HEADING.into(),
                message: NO_RESULTS_MESSAGE.into(),
            }
        );
    }

    #[test]
    fn page_past_end_renders_empty_cards() {
        let filtered = vec![article("office")];
        let content = renderer()
            .render_listing_content(&catalog(), &filtered, &[])
            .unwrap();
        assert_eq!(content, ListingContent::Cards { cards: Vec::new() });
    }

    #[test]
    fn filters_mark_the_active_category() {
        let filters = renderer().render_filters(&catalog(), &CategoryFilter::parse("office"));
        assert_eq!(filters.len(), 2);
        assert!(!filters[0].active);
        assert_eq!(filters[1].label, "Home Office");
        assert!(filters[1].active);
    }
}
