use std::sync::Arc;

use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleView, IdentifierKind, NotFoundReason},
        error::ApplicationResult,
    },
    domain::article::{Article, ArticleId, ArticleStore},
};

/// Deep-link parameters: `name` is a slug, `id` the legacy numeric form.
#[derive(Debug, Clone, Default)]
pub struct GetArticleQuery {
    pub name: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleLocator {
    Slug(String),
    LegacyId(String),
}

impl ArticleLocator {
    /// `name` wins over `id`; blank values count as absent.
    pub fn from_params(name: Option<&str>, id: Option<&str>) -> Option<Self> {
        let present = |value: Option<&str>| value.filter(|v| !v.is_empty()).map(str::to_string);
        present(name)
            .map(Self::Slug)
            .or_else(|| present(id).map(Self::LegacyId))
    }

    pub fn kind(&self) -> IdentifierKind {
        match self {
            Self::Slug(_) => IdentifierKind::Slug,
            Self::LegacyId(_) => IdentifierKind::Id,
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            Self::Slug(value) | Self::LegacyId(value) => value,
        }
    }
}

/// Reads the integer at the start of a legacy id the way old links were
/// written: `"3abc"` and `"2.0"` name articles 3 and 2.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value = rest[..end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

impl ArticleQueryService {
    /// Linear scan re-deriving each title's slug.
    pub fn find_by_slug<'a>(
        &self,
        store: &'a ArticleStore,
        slug: &str,
    ) -> Option<&'a Arc<Article>> {
        store
            .articles()
            .iter()
            .find(|article| self.slugger.slugify(article.title.as_str()) == slug)
    }

    pub fn resolve<'a>(
        &self,
        store: &'a ArticleStore,
        locator: &ArticleLocator,
    ) -> Option<&'a Arc<Article>> {
        match locator {
            ArticleLocator::Slug(slug) => self.find_by_slug(store, slug),
            ArticleLocator::LegacyId(raw) => leading_integer(raw)
                .and_then(|id| ArticleId::new(id).ok())
                .and_then(|id| store.find_by_id(id)),
        }
    }

    pub fn get_article(
        &self,
        store: &ArticleStore,
        query: GetArticleQuery,
    ) -> ApplicationResult<ArticleView> {
        let Some(locator) = ArticleLocator::from_params(query.name.as_deref(), query.id.as_deref())
        else {
            tracing::info!("article requested without an identifier");
            return Ok(ArticleView::NotFound(
                self.renderer.render_not_found(NotFoundReason::NoIdentifier),
            ));
        };

        match self.resolve(store, &locator) {
            Some(article) => {
                let view = self.renderer.render_detail(store.catalog(), article)?;
                Ok(ArticleView::Found(view))
            }
            None => {
                tracing::info!(
                    kind = locator.kind().label(),
                    identifier = locator.identifier(),
                    "article not found"
                );
                Ok(ArticleView::NotFound(self.renderer.render_not_found(
                    NotFoundReason::Unmatched {
                        kind: locator.kind(),
                        identifier: locator.identifier().to_string(),
                    },
                )))
            }
        }
    }
}
