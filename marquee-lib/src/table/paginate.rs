//! Page slicing and the page-number window.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::page::Page;

/// Page counts above this collapse into a window with ellipses.
const FULL_WINDOW: usize = 5;

/// Number of pages needed for `total_count` rows, never less than one.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_count.div_ceil(page_size).max(1)
}

/// Clamps a 1-based page number into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_count: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(total_count, page_size))
}

/// Cuts one page out of the matching rows.
///
/// `total_count` on the result is the number of matching rows before
/// slicing. A page past the end yields an empty slice; callers clamp the
/// page first (see [`clamp_page`]) so that never reaches the screen.
pub fn paginate<R: Clone>(rows: &[R], page: usize, page_size: usize) -> Page<R> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    Page::new(rows[start..end].to_vec(), rows.len())
}

/// One element of the page-number control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLink {
    /// A clickable page number.
    Page(usize),
    /// Collapsed run of pages.
    Ellipsis,
}

impl fmt::Display for PageLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLink::Page(n) => write!(f, "{}", n),
            PageLink::Ellipsis => f.write_str("…"),
        }
    }
}

/// Page numbers to display for the current position.
///
/// Five or fewer pages are listed in full. Beyond that the first and last
/// pages are always shown, with the current page and its neighbours in
/// between and an ellipsis on each side that skips pages. The result never
/// holds more than seven links.
pub fn page_window(total_pages: usize, current: usize) -> Vec<PageLink> {
    if total_pages <= FULL_WINDOW {
        return (1..=total_pages).map(PageLink::Page).collect();
    }

    let current = current.clamp(1, total_pages);
    let mut links = vec![PageLink::Page(1)];
    if current > 3 {
        links.push(PageLink::Ellipsis);
    }
    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);
    links.extend((start..=end).map(PageLink::Page));
    if current < total_pages - 2 {
        links.push(PageLink::Ellipsis);
    }
    links.push(PageLink::Page(total_pages));
    links
}

/// "Showing first-last of total" summary for a table footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageRange {
    /// 1-based index of the first row on the page; 0 when empty.
    pub first: usize,
    /// 1-based index of the last row on the page; 0 when empty.
    pub last: usize,
    pub total: usize,
}

impl PageRange {
    /// Computes the range shown by `page` for `total` matching rows.
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let start = page.saturating_sub(1).saturating_mul(page_size);
        if total == 0 || start >= total {
            return Self {
                first: 0,
                last: 0,
                total,
            };
        }
        Self {
            first: start + 1,
            last: start.saturating_add(page_size).min(total),
            total,
        }
    }

    /// Returns `true` if the page shows no rows.
    pub fn is_empty(&self) -> bool {
        self.first == 0
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Showing 0 of {}", self.total)
        } else {
            write!(f, "Showing {}-{} of {}", self.first, self.last, self.total)
        }
    }
}
