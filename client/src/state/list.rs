//! Generic filter → sort → paginate pipeline shared by every list screen.
//!
//! DESIGN
//! ======
//! Screens keep the last fetched collection untouched and derive what is shown
//! from it plus a `ListQuery`. Nothing here talks to the network, so changing
//! the search text, tab, sort order, or page never needs a round-trip.
//!
//! Each entity opts in by implementing `Listable`: which text fields the
//! search box looks at, which enum the category tabs filter on, and which date
//! field (if any) drives sorting.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use std::cmp::Reverse;

use crate::util::dates::parse_timestamp;

/// An entity that can be shown through the list pipeline.
pub trait Listable {
    /// Enumeration the category tabs filter on; `()` when a screen has no tabs.
    type Category: Copy + PartialEq;

    /// Text fields matched by the search box.
    fn search_fields(&self) -> Vec<&str>;

    fn category(&self) -> Self::Category;

    /// Raw date string used for sorting, if the entity has one.
    fn date_key(&self) -> Option<&str> {
        None
    }
}

/// Category tab selection with an "All" wildcard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: PartialEq> CategoryFilter<C> {
    pub fn accepts(&self, category: &C) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first.
    Ascending,
    /// Newest first.
    Descending,
}

/// Per-screen constants for the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListConfig {
    /// `None` shows every match on one page.
    pub page_size: Option<usize>,
}

/// Current UI filter state for one list screen. Pages are 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery<C> {
    pub search: String,
    pub category: CategoryFilter<C>,
    pub sort: Option<SortOrder>,
    pub page: usize,
}

impl<C> Default for ListQuery<C> {
    fn default() -> Self {
        Self { search: String::new(), category: CategoryFilter::All, sort: None, page: 1 }
    }
}

impl<C> ListQuery<C> {
    pub fn sorted(order: SortOrder) -> Self {
        Self { sort: Some(order), ..Self::default() }
    }

    /// Update the search text and jump back to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Switch category tab and jump back to the first page.
    pub fn set_category(&mut self, category: CategoryFilter<C>) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_sort(&mut self, order: SortOrder) {
        self.sort = Some(order);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.page = clamp_page(self.page.saturating_add(1), total_pages);
    }

    pub fn prev_page(&mut self, total_pages: usize) {
        self.page = clamp_page(self.page.saturating_sub(1), total_pages);
    }
}

/// The derived, displayable slice of a collection.
#[derive(Clone, Debug, PartialEq)]
pub struct ListView<T> {
    pub rows: Vec<T>,
    /// Items that passed the filters, across all pages.
    pub total_matches: usize,
    /// Page actually shown, after clamping.
    pub page: usize,
    /// `ceil(total_matches / page_size)`; zero when nothing matched.
    pub total_pages: usize,
}

impl<T> ListView<T> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Case-insensitive substring match on any search field. Only the empty query
/// matches everything; whitespace is part of the needle.
pub fn matches_search<T: Listable>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn matches_category<T: Listable>(item: &T, filter: &CategoryFilter<T::Category>) -> bool {
    filter.accepts(&item.category())
}

/// Stable sort by parsed date key. Missing or unparseable dates sort as the
/// earliest instant; equal keys keep their input order in both directions.
pub fn sort_by_date<T: Listable>(items: &mut [T], order: SortOrder) {
    match order {
        SortOrder::Ascending => items.sort_by_cached_key(|item| item.date_key().and_then(parse_timestamp)),
        SortOrder::Descending => {
            items.sort_by_cached_key(|item| Reverse(item.date_key().and_then(parse_timestamp)));
        }
    }
}

/// Number of pages needed for `total` items.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return usize::from(total > 0);
    }
    total.div_ceil(page_size)
}

/// Clamp a 1-based page index into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slice one page out of `items`. Returns the clamped page index with it.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> (Vec<T>, usize) {
    let total_pages = page_count(items.len(), page_size);
    let page = clamp_page(page, total_pages);
    if page_size == 0 {
        return (items.to_vec(), page);
    }
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    (items[start..end].to_vec(), page)
}

/// Run the full pipeline: filter by category and search text, sort, paginate.
pub fn derive<T>(items: &[T], query: &ListQuery<T::Category>, config: ListConfig) -> ListView<T>
where
    T: Listable + Clone,
{
    let mut matched: Vec<T> = items
        .iter()
        .filter(|item| matches_category(*item, &query.category) && matches_search(*item, &query.search))
        .cloned()
        .collect();

    if let Some(order) = query.sort {
        sort_by_date(&mut matched, order);
    }

    let total_matches = matched.len();
    match config.page_size {
        Some(size) if size > 0 => {
            let total_pages = page_count(total_matches, size);
            let (rows, page) = paginate(&matched, query.page, size);
            ListView { rows, total_matches, page, total_pages }
        }
        _ => ListView { rows: matched, total_matches, page: 1, total_pages: usize::from(total_matches > 0) },
    }
}
