use super::{NOT_FOUND_HEADING, PRODUCTS_HEADING, ViewRenderer, format_date};
use crate::application::dto::{
    ArticleDetailView, ArticleHeaderView, ArticleNotFoundView, LinkView, NotFoundReason,
    ProductView, ProductsSectionView,
};
use crate::application::error::ApplicationResult;
use crate::application::navigation::LISTING_PATH;
use crate::domain::article::{Article, CategoryCatalog};

pub const BACK_LINK_LABEL: &str = "Return to Home";

impl ViewRenderer {
    pub fn render_detail(
        &self,
        catalog: &CategoryCatalog,
        article: &Article,
    ) -> ApplicationResult<ArticleDetailView> {
        let header = ArticleHeaderView {
            image: article.image.clone(),
            image_alt: article.title.to_string(),
            title: article.title.to_string(),
            category: catalog.display_name(&article.category)?.to_string(),
            date: format_date(article.date),
            author: article.author.clone(),
            byline: format!("By {}", article.author),
        };

        let products = article.has_products().then(|| ProductsSectionView {
            heading: PRODUCTS_HEADING.into(),
            items: article
                .products
                .iter()
                .map(|product| ProductView {
                    name: product.name.clone(),
                    description: product.description.clone(),
                    image: product.image.clone(),
                    image_alt: product.name.clone(),
                })
                .collect(),
        });

        Ok(ArticleDetailView {
            document_title: format!("{} - {}", article.title, self.site_name),
            header,
            body: article.content.clone(),
            products,
        })
    }

    pub fn render_not_found(&self, cause: NotFoundReason) -> ArticleNotFoundView {
        let message = match &cause {
            NotFoundReason::NoIdentifier => "No article specified.".to_string(),
            NotFoundReason::Unmatched { kind, identifier } => {
                format!("Could not find article with {}: {identifier}", kind.label())
            }
        };

        ArticleNotFoundView {
            heading: NOT_FOUND_HEADING.into(),
            message,
            cause,
            back_link: LinkView {
                href: LISTING_PATH.into(),
                label: BACK_LINK_LABEL.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::IdentifierKind;
    use crate::application::ports::util::SlugGenerator;
    use crate::domain::article::{
        ArticleId, ArticleTitle, CategoryEntry, CategoryKey, Product,
    };
    use chrono::NaiveDate;
    use std::sync::Arc;

    struct NoopSlug;

    impl SlugGenerator for NoopSlug {
        fn slugify(&self, input: &str) -> String {
            input.to_string()
        }
    }

    fn renderer() -> ViewRenderer {
        ViewRenderer::new(Arc::new(NoopSlug), "EverydayHaven")
    }

    fn catalog() -> CategoryCatalog {
        CategoryCatalog::new(vec![CategoryEntry {
            key: CategoryKey::new("kitchen").unwrap(),
            name: "Kitchen".into(),
        }])
        .unwrap()
    }

    fn article(products: Vec<Product>) -> Article {
        Article {
            id: ArticleId::new(9).unwrap(),
            title: ArticleTitle::new("Pour Over Basics").unwrap(),
            category: CategoryKey::new("kitchen").unwrap(),
            excerpt: String::new(),
            content: "<p>Bloom the <em>grounds</em>.</p>".into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
            author: "Rin".into(),
            image: "images/pour-over.jpg".into(),
            products,
        }
    }

    #[test]
    fn detail_passes_content_through_and_omits_empty_products() {
        let view = renderer().render_detail(&catalog(), &article(Vec::new())).unwrap();
        assert_eq!(view.body, "<p>Bloom the <em>grounds</em>.</p>");
        assert_eq!(view.header.category, "Kitchen");
        assert_eq!(view.header.date, "March 9, 2025");
        assert_eq!(view.header.byline, "By Rin");
        assert_eq!(view.document_title, "Pour Over Basics - EverydayHaven");
        assert!(view.products.is_none());
    }

    #[test]
    fn detail_lists_products_in_order() {
        let products = vec![
            Product {
                name: "Kettle".into(),
                description: "Gooseneck".into(),
                image: "k.jpg".into(),
            },
            Product {
                name: "Scale".into(),
                description: "0.1 g".into(),
                image: "s.jpg".into(),
            },
        ];
        let view = renderer().render_detail(&catalog(), &article(products)).unwrap();
        let section = view.products.unwrap();
        assert_eq!(section.heading, "Recommended Products");
        let names: Vec<&str> = section.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Kettle", "Scale"]);
    }

    #[test]
    fn not_found_states_are_distinct() {
        let renderer = renderer();
        let missing = renderer.render_not_found(NotFoundReason::NoIdentifier);
        assert_eq!(missing.message, "No article specified.");

        let unmatched = renderer.render_not_found(NotFoundReason::Unmatched {
            kind: IdentifierKind::Slug,
            identifier: "non-existent-slug".into(),
        });
        assert_eq!(
            unmatched.message,
            "Could not find article with slug: non-existent-slug"
        );
        assert_ne!(missing.message, unmatched.message);
        assert_eq!(unmatched.back_link.href, "index.html");
    }
}
