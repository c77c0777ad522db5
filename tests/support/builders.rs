// tests/support/builders.rs
use chrono::NaiveDate;

use haven_core::domain::article::*;

pub const CATEGORIES: [(&str, &str); 3] = [
    ("home-office", "Home Office"),
    ("kitchen", "Kitchen & Dining"),
    ("living", "Living Spaces"),
];

pub fn catalog() -> CategoryCatalog {
    CategoryCatalog::new(
        CATEGORIES
            .iter()
            .map(|(key, name)| CategoryEntry {
                key: CategoryKey::new(*key).unwrap(),
                name: (*name).into(),
            })
            .collect(),
    )
    .unwrap()
}

pub struct ArticleBuilder {
    id: i64,
    title: String,
    category: String,
    excerpt: String,
    content: String,
    date: NaiveDate,
    author: String,
    products: Vec<Product>,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Article Number {id}"),
            category: "living".into(),
            excerpt: format!("Excerpt {id}"),
            content: format!("<p>Body {id}</p>"),
            date: NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
            author: "Maya Chen".into(),
            products: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn product(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.products.push(Product {
            description: format!("{name} description"),
            image: format!("images/{}.jpg", name.to_lowercase()),
            name,
        });
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            category: CategoryKey::new(self.category).unwrap(),
            excerpt: self.excerpt,
            content: self.content,
            date: self.date,
            author: self.author,
            image: format!("images/article-{}.jpg", self.id),
            products: self.products,
        }
    }
}

pub fn store_of(articles: Vec<Article>) -> ArticleStore {
    ArticleStore::new(catalog(), articles).unwrap()
}

/// `count` articles cycling through the three categories in order.
pub fn numbered_store(count: i64) -> ArticleStore {
    let articles = (1..=count)
        .map(|id| {
            let (key, _) = CATEGORIES[((id - 1) % 3) as usize];
            ArticleBuilder::new(id).category(key).build()
        })
        .collect();
    store_of(articles)
}
