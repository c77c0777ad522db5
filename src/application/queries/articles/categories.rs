use super::ArticleQueryService;
use crate::{application::dto::CategoryDto, domain::article::ArticleStore};

impl ArticleQueryService {
    pub fn list_categories(&self, store: &ArticleStore) -> Vec<CategoryDto> {
        store
            .catalog()
            .iter()
            .map(|entry| CategoryDto {
                key: entry.key.to_string(),
                name: entry.name.clone(),
            })
            .collect()
    }
}
