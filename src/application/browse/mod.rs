//! Query engine and pagination over the in-memory article store.
mod pagination;
mod session;

pub use pagination::{DEFAULT_PAGE_SIZE, Paginator, page_controls};
pub use session::BrowseSession;
