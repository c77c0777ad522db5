//! Pure projections from articles to the view-models the page paints.
mod date;
mod detail;
mod listing;

pub use date::format_date;

use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;

pub const NO_RESULTS_HEADING: &str = "No articles found";
pub const NO_RESULTS_MESSAGE: &str = "Try adjusting your search or filter criteria.";
pub const NOT_FOUND_HEADING: &str = "Article Not Found";
pub const PRODUCTS_HEADING: &str = "Recommended Products";
pub const ALL_FILTER_LABEL: &str = "All";

#[derive(Clone)]
pub struct ViewRenderer {
    slugger: Arc<dyn SlugGenerator>,
    site_name: String,
}

impl ViewRenderer {
    pub fn new(slugger: Arc<dyn SlugGenerator>, site_name: impl Into<String>) -> Self {
        Self {
            slugger,
            site_name: site_name.into(),
        }
    }
}
