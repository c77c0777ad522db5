use std::num::NonZeroUsize;

use crate::application::dto::{PageButton, PageControlsView, PageItem};
use crate::application::error::{ApplicationError, ApplicationResult};

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Splits a result set into fixed-size, 1-based pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: NonZeroUsize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> ApplicationResult<Self> {
        let page_size = NonZeroUsize::new(page_size)
            .ok_or_else(|| ApplicationError::validation("page size must be at least 1"))?;
        Ok(Self { page_size })
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Never less than one, so an empty result set still has a page.
    pub fn page_count(&self, filtered_count: usize) -> usize {
        filtered_count.div_ceil(self.page_size.get()).max(1)
    }

    /// Items on `page`, clipped to what exists. Out-of-range pages yield an
    /// empty slice.
    pub fn page_slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let size = self.page_size.get();
        let Some(start) = page.checked_sub(1).and_then(|index| index.checked_mul(size)) else {
            return &[];
        };
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(size).min(items.len());
        &items[start..end]
    }
}

/// Button layout for the pager: first, last and the neighbours of the
/// current page, with each gap collapsed into one ellipsis. `None` when there
/// is only a single page.
pub fn page_controls(current_page: usize, total_pages: usize) -> Option<PageControlsView> {
    if total_pages <= 1 {
        return None;
    }

    let mut items = Vec::new();
    let mut last_shown = 0usize;
    for number in 1..=total_pages {
        let near_current = number.abs_diff(current_page) <= 1;
        if number != 1 && number != total_pages && !near_current {
            continue;
        }
        if number > last_shown + 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page {
            number,
            active: number == current_page,
        });
        last_shown = number;
    }

    Some(PageControlsView {
        previous: PageButton {
            page: current_page.saturating_sub(1).clamp(1, total_pages),
            disabled: current_page <= 1,
        },
        items,
        next: PageButton {
            page: current_page.saturating_add(1).clamp(1, total_pages),
            disabled: current_page >= total_pages,
        },
    })
}
