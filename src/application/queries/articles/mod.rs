mod categories;
mod get_article;
mod list;
mod service;

pub use get_article::{ArticleLocator, GetArticleQuery};
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
