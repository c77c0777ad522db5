pub mod article;
pub mod listing;
pub mod navigation;
pub mod pagination;

pub use article::{
    ArticleDetailView, ArticleHeaderView, ArticleNotFoundView, ArticleView, IdentifierKind,
    LinkView, NotFoundReason, ProductView, ProductsSectionView,
};
pub use listing::{ArticleCardView, CategoryDto, FilterButtonView, ListingContent, ListingView};
pub use navigation::NavigationTarget;
pub use pagination::{PageButton, PageControlsView, PageItem};
