use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LinkView {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleHeaderView {
    pub image: String,
    pub image_alt: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub author: String,
    pub byline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductView {
    pub name: String,
    pub description: String,
    pub image: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductsSectionView {
    pub heading: String,
    pub items: Vec<ProductView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailView {
    pub document_title: String,
    pub header: ArticleHeaderView,
    /// Article markup, verbatim.
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<ProductsSectionView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    Slug,
    Id,
}

impl IdentifierKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Slug => "slug",
            Self::Id => "ID",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum NotFoundReason {
    NoIdentifier,
    Unmatched {
        kind: IdentifierKind,
        identifier: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleNotFoundView {
    pub heading: String,
    pub message: String,
    pub cause: NotFoundReason,
    pub back_link: LinkView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArticleView {
    Found(ArticleDetailView),
    NotFound(ArticleNotFoundView),
}

impl ArticleView {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
