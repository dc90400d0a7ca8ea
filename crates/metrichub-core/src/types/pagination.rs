//! Pagination types for table views.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u32 = 3;
/// Maximum page size.
const MAX_PAGE_SIZE: u32 = 100;

/// Request parameters for a paginated view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Calculate the offset of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.page_size as usize
    }

    /// Clamp the requested page into `[1, total_pages]` for the given item
    /// count. Shrinking the filtered set must never leave the view stranded
    /// on a page past the new last page.
    pub fn clamped(&self, total_items: usize) -> Self {
        Self {
            page: self.page.min(total_pages(total_items, self.page_size)),
            page_size: self.page_size,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Total number of pages for an item count, never less than 1 so that page
/// controls stay renderable for an empty result set.
pub fn total_pages(total_items: usize, page_size: u32) -> u32 {
    if total_items == 0 {
        1
    } else {
        total_items.div_ceil(page_size as usize) as u32
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
    /// Total number of items across all pages.
    pub total_items: usize,
    /// Total number of pages.
    pub total_pages: u32,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total_items: usize) -> Self {
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages: total_pages(total_items, page_size),
        }
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1, 3).offset(), 0);
        assert_eq!(PageRequest::new(2, 3).offset(), 3);
    }

    #[test]
    fn test_page_floor_is_one() {
        assert_eq!(PageRequest::new(0, 3).page, 1);
    }

    #[test]
    fn test_total_pages_minimum_one() {
        assert_eq!(total_pages(0, 3), 1);
        assert_eq!(total_pages(5, 3), 2);
        assert_eq!(total_pages(6, 3), 2);
        assert_eq!(total_pages(7, 3), 3);
    }

    #[test]
    fn test_clamped_pulls_page_back() {
        let request = PageRequest::new(3, 3);
        assert_eq!(request.clamped(5).page, 2);
        assert_eq!(request.clamped(0).page, 1);
        // In-range pages are untouched.
        assert_eq!(PageRequest::new(2, 3).clamped(5).page, 2);
    }

    #[test]
    fn test_page_response_navigation() {
        let response = PageResponse::new(vec![1, 2, 3], 1, 3, 5);
        assert!(response.has_next());
        assert!(!response.has_previous());
        let last = PageResponse::new(vec![4, 5], 2, 3, 5);
        assert!(!last.has_next());
        assert!(last.has_previous());
    }
}
