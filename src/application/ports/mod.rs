// src/application/ports/mod.rs
pub mod source;
pub mod util;

pub type SlugGeneratorPort = dyn util::SlugGenerator;
pub type ArticleSourcePort = dyn source::ArticleSource;
