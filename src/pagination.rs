//! Result selection and client-side pagination.
//!
//! A listing holds two result sets: the *browse* set (all meals or one
//! category) and the *search* set (by ingredient). A non-empty search set
//! always shadows the browse set. Pages are 1-based and hold [`PAGE_SIZE`]
//! recipes each.

use serde::Serialize;

/// Number of recipes on one page.
pub const PAGE_SIZE: usize = 12;

/// Pick the set that is displayed: the search set when it has any results,
/// the browse set otherwise.
pub fn active_set<'a, T>(browse: &'a [T], search: &'a [T]) -> &'a [T] {
    if search.is_empty() {
        browse
    } else {
        search
    }
}

/// Number of pages needed for `len` items. Zero items need zero pages.
pub fn total_pages(len: usize) -> u32 {
    len.div_ceil(PAGE_SIZE) as u32
}

/// The items on 1-based `page`. Pages past the end, and page 0, are empty.
pub fn visible_slice<T>(items: &[T], page: u32) -> &[T] {
    let Some(index) = (page as usize).checked_sub(1) else {
        return &[];
    };
    let start = index.saturating_mul(PAGE_SIZE).min(items.len());
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// One entry per page, `1..=total`, for the page-selection strip.
pub fn page_numbers(total: u32) -> Vec<u32> {
    (1..=total).collect()
}

/// A derived, read-only view of one page of the active set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView<'a, T> {
    pub items: &'a [T],
    pub current_page: u32,
    pub total_pages: u32,
}

impl<'a, T> PageView<'a, T> {
    /// Combine browse and search sets at the given cursor.
    pub fn select(browse: &'a [T], search: &'a [T], page: u32) -> Self {
        Self::of(active_set(browse, search), page)
    }

    pub fn of(items: &'a [T], page: u32) -> Self {
        Self {
            items: visible_slice(items, page),
            current_page: page,
            total_pages: total_pages(items.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
