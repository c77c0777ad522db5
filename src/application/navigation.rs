// src/application/navigation.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::dto::NavigationTarget;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::{CategoryFilter, SearchTerm};

pub const LISTING_PATH: &str = "index.html";
pub const ARTICLE_PATH: &str = "article.html";

/// The page the visitor is on. Supplied by the caller, never guessed from the
/// URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Listing,
    Article,
    About,
    Contact,
}

/// Slugs only contain `[a-z0-9-]`, so they go into the query string as is.
pub fn article_href(slug: &str) -> String {
    format!("{ARTICLE_PATH}?name={slug}")
}

pub fn listing_href(params: &[(&str, &str)]) -> ApplicationResult<String> {
    if params.is_empty() {
        return Ok(LISTING_PATH.to_string());
    }
    let query = serde_urlencoded::to_string(params)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
    Ok(format!("{LISTING_PATH}?{query}"))
}

pub fn search_navigation(page: Page, raw_query: &str) -> ApplicationResult<NavigationTarget> {
    let term = SearchTerm::normalize(raw_query);
    if page == Page::Listing {
        return Ok(NavigationTarget::ApplySearch {
            search: term.as_str().to_string(),
        });
    }

    let href = if term.is_empty() {
        listing_href(&[])?
    } else {
        listing_href(&[("search", term.as_str())])?
    };
    Ok(NavigationTarget::Redirect { href })
}

pub fn category_navigation(
    page: Page,
    category: &CategoryFilter,
) -> ApplicationResult<NavigationTarget> {
    if page == Page::Listing {
        return Ok(NavigationTarget::ApplyCategory {
            category: category.as_str().to_string(),
        });
    }

    let href = match category.key() {
        Some(key) => listing_href(&[("category", key.as_str())])?,
        None => listing_href(&[])?,
    };
    Ok(NavigationTarget::Redirect { href })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_on_listing_stays_in_place() {
        let target = search_navigation(Page::Listing, "  Desk Lamp ").unwrap();
        assert_eq!(
            target,
            NavigationTarget::ApplySearch {
                search: "desk lamp".into()
            }
        );
    }

    #[test]
    fn search_elsewhere_redirects_with_encoded_term() {
        let target = search_navigation(Page::Article, "Desk & Lamp").unwrap();
        assert_eq!(
            target,
            NavigationTarget::Redirect {
                href: "index.html?search=desk+%26+lamp".into()
            }
        );
    }

    #[test]
    fn empty_search_elsewhere_redirects_home() {
        let target = search_navigation(Page::About, "   ").unwrap();
        assert_eq!(
            target,
            NavigationTarget::Redirect {
                href: "index.html".into()
            }
        );
    }

    #[test]
    fn category_elsewhere_redirects_with_key() {
        let target = category_navigation(Page::Contact, &CategoryFilter::parse("kitchen")).unwrap();
        assert_eq!(
            target,
            NavigationTarget::Redirect {
                href: "index.html?category=kitchen".into()
            }
        );
        let all = category_navigation(Page::Contact, &CategoryFilter::All).unwrap();
        assert_eq!(
            all,
            NavigationTarget::Redirect {
                href: "index.html".into()
            }
        );
    }

    #[test]
    fn article_href_uses_name_parameter() {
        assert_eq!(article_href("cozy-nook"), "article.html?name=cozy-nook");
    }
}
