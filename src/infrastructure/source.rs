// src/infrastructure/source.rs
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::application::{
    ApplicationResult, error::ApplicationError, ports::source::ArticleSource,
};
use crate::domain::article::{
    Article, ArticleId, ArticleStore, ArticleTitle, CategoryCatalog, CategoryEntry, CategoryKey,
    Product,
};
use crate::domain::errors::DomainError;

#[derive(Debug, Deserialize)]
struct StoreDocument {
    categories: Vec<CategoryRecord>,
    articles: Vec<ArticleRecord>,
}

#[derive(Debug, Deserialize)]
struct CategoryRecord {
    key: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ArticleRecord {
    id: i64,
    title: String,
    category: String,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    content: String,
    date: NaiveDate,
    #[serde(default)]
    author: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
}

impl TryFrom<CategoryRecord> for CategoryEntry {
    type Error = DomainError;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        Ok(CategoryEntry {
            key: CategoryKey::new(record.key)?,
            name: record.name,
        })
    }
}

impl TryFrom<ArticleRecord> for Article {
    type Error = DomainError;

    fn try_from(record: ArticleRecord) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(record.id)?,
            title: ArticleTitle::new(record.title)?,
            category: CategoryKey::new(record.category)?,
            excerpt: record.excerpt,
            content: record.content,
            date: record.date,
            author: record.author,
            image: record.image,
            products: record
                .products
                .into_iter()
                .map(|product| Product {
                    name: product.name,
                    description: product.description,
                    image: product.image,
                })
                .collect(),
        })
    }
}

/// Parses the JSON store document:
/// `{ "categories": [{ "key", "name" }], "articles": [...] }`.
pub fn parse_store(json: &str) -> ApplicationResult<ArticleStore> {
    let document: StoreDocument = serde_json::from_str(json)
        .map_err(|err| ApplicationError::validation(format!("malformed article data: {err}")))?;

    let entries = document
        .categories
        .into_iter()
        .map(CategoryEntry::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let articles = document
        .articles
        .into_iter()
        .map(Article::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ArticleStore::new(CategoryCatalog::new(entries)?, articles)?)
}

#[derive(Debug, Clone)]
pub struct JsonFileArticleSource {
    path: PathBuf,
}

impl JsonFileArticleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ArticleSource for JsonFileArticleSource {
    async fn load(&self) -> ApplicationResult<ArticleStore> {
        let json = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            ApplicationError::infrastructure(format!(
                "failed to read {}: {err}",
                self.path.display()
            ))
        })?;
        parse_store(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "categories": [
            { "key": "kitchen", "name": "Kitchen" }
        ],
        "articles": [
            {
                "id": 1,
                "title": "Pour Over Basics",
                "category": "kitchen",
                "excerpt": "Brew better",
                "content": "<p>Bloom first.</p>",
                "date": "2025-07-04",
                "author": "Rin",
                "image": "images/pour-over.jpg",
                "products": [
                    { "name": "Kettle", "description": "Gooseneck", "image": "k.jpg" }
                ]
            },
            {
                "id": 2,
                "title": "Knife Care",
                "category": "kitchen",
                "date": "2025-06-01"
            }
        ]
    }"#;

    #[test]
    fn parses_articles_with_optional_products() {
        let store = parse_store(SAMPLE).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.articles()[0].products.len(), 1);
        assert!(store.articles()[1].products.is_empty());
        assert_eq!(
            store.articles()[0].date,
            NaiveDate::from_ymd_opt(2025, 7, 4).unwrap()
        );
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        let err = parse_store("{ not json").unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
    }

    #[test]
    fn unknown_category_fails_the_load() {
        let json = r#"{
            "categories": [{ "key": "kitchen", "name": "Kitchen" }],
            "articles": [
                { "id": 1, "title": "Seed Trays", "category": "garden", "date": "2025-04-02" }
            ]
        }"#;
        let err = parse_store(json).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::MissingLookupKey(_))
        ));
    }

    #[tokio::test]
    async fn missing_file_is_an_infrastructure_error() {
        let source = JsonFileArticleSource::new("does/not/exist.json");
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, ApplicationError::Infrastructure(_)));
    }
}
