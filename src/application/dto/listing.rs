use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::pagination::PageControlsView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleCardView {
    pub slug: String,
    pub href: String,
    pub image: String,
    pub image_alt: String,
    pub category: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListingContent {
    Cards { cards: Vec<ArticleCardView> },
    NoResults { heading: String, message: String },
}

impl ListingContent {
    pub fn cards(&self) -> &[ArticleCardView] {
        match self {
            Self::Cards { cards } => cards,
            Self::NoResults { .. } => &[],
        }
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self, Self::NoResults { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FilterButtonView {
    pub category: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListingView {
    pub category: String,
    pub search: String,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_results: usize,
    pub filters: Vec<FilterButtonView>,
    pub content: ListingContent,
    /// Absent when everything fits on one page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageControlsView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub key: String,
    pub name: String,
}
