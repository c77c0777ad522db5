use crate::domain::article::value_objects::CategoryKey;
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub key: CategoryKey,
    pub name: String,
}

/// Ordered mapping from category key to its human-readable label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCatalog {
    entries: Vec<CategoryEntry>,
}

impl CategoryCatalog {
    pub fn new(entries: Vec<CategoryEntry>) -> DomainResult<Self> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(DomainError::Validation(format!(
                    "category `{}` has an empty display name",
                    entry.key
                )));
            }
            if entries[..index].iter().any(|other| other.key == entry.key) {
                return Err(DomainError::Conflict(format!(
                    "category `{}` is declared twice",
                    entry.key
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn contains(&self, key: &CategoryKey) -> bool {
        self.entries.iter().any(|entry| &entry.key == key)
    }

    /// A missing key means the data and the catalog disagree, so it is
    /// reported rather than rendered blank.
    pub fn display_name(&self, key: &CategoryKey) -> DomainResult<&str> {
        self.entries
            .iter()
            .find(|entry| &entry.key == key)
            .map(|entry| entry.name.as_str())
            .ok_or_else(|| DomainError::MissingLookupKey(format!("category `{key}`")))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
