// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle, CategoryKey};
use chrono::NaiveDate;

/// A product recommended alongside an article. Display-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub image: String,
}

/// Immutable article record as held by the `ArticleStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub category: CategoryKey,
    pub excerpt: String,
    /// Rich text body; passed through to the presentation layer untouched.
    pub content: String,
    pub date: NaiveDate,
    pub author: String,
    pub image: String,
    pub products: Vec<Product>,
}

impl Article {
    pub fn has_products(&self) -> bool {
        !self.products.is_empty()
    }

    /// Case-insensitive substring test over title, excerpt and content.
    /// `needle` must already be lower-cased.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.as_str().to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
    }
}
