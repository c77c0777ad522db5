pub mod category;
pub mod entity;
pub mod specifications;
pub mod store;
pub mod value_objects;

pub use category::{CategoryCatalog, CategoryEntry};
pub use entity::{Article, Product};
pub use specifications::{ALL_CATEGORIES, BrowseSpec, CategoryFilter, SearchTerm};
pub use store::ArticleStore;
pub use value_objects::{ArticleId, ArticleTitle, CategoryKey};
