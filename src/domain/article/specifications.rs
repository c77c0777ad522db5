use std::fmt;

use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::CategoryKey;

/// Filter value that selects every category.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryKey),
}

impl CategoryFilter {
    /// Filter input is always valid: `all` or blank selects everything, any
    /// other value is taken as a key even if the catalog does not know it.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == ALL_CATEGORIES {
            return Self::All;
        }
        CategoryKey::new(trimmed).map_or(Self::All, Self::Only)
    }

    pub fn matches(&self, article: &Article) -> bool {
        match self {
            Self::All => true,
            Self::Only(key) => &article.category == key,
        }
    }

    pub fn key(&self) -> Option<&CategoryKey> {
        match self {
            Self::All => None,
            Self::Only(key) => Some(key),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(key) => key.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trimmed, lower-cased search input. Empty matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, article: &Article) -> bool {
        self.is_empty() || article.mentions(&self.0)
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Both browse predicates applied to a single article.
pub struct BrowseSpec<'a> {
    category: &'a CategoryFilter,
    search: &'a SearchTerm,
    article: &'a Article,
}

impl<'a> BrowseSpec<'a> {
    pub fn new(category: &'a CategoryFilter, search: &'a SearchTerm, article: &'a Article) -> Self {
        Self {
            category,
            search,
            article,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.category.matches(self.article) && self.search.matches(self.article)
    }
}
