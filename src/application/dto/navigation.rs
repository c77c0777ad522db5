use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What the presentation layer should do after a navigation input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationTarget {
    /// Re-run the listing already on screen with a new search term.
    ApplySearch { search: String },
    /// Re-run the listing already on screen with a new category filter.
    ApplyCategory { category: String },
    /// Load another page.
    Redirect { href: String },
}
