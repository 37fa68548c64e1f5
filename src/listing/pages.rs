//! Page slicing and the page-link window rendered under every table.

use serde::Serialize;

/// Number of pages needed for `len` items; zero for an empty sequence.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Clamps a 1-based page number into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Pages always linked at each end of the pager.
const EDGE_LINKS: usize = 2;
/// Pages linked before the current one.
const LINKS_BEFORE: usize = 2;
/// Pages linked after the current one.
const LINKS_AFTER: usize = 4;

/// Page links for `current_page` out of `total_pages`.
///
/// Three runs are linked: the first pages, a window around the current page
/// and the last pages. Runs that touch or overlap merge; every gap between
/// them becomes a single `None`. Numbers ascend and never repeat.
fn page_links(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return Vec::new();
    }

    let runs = [
        (1, EDGE_LINKS.min(total_pages)),
        (
            current_page.saturating_sub(LINKS_BEFORE).max(1),
            (current_page + LINKS_AFTER).min(total_pages),
        ),
        (total_pages.saturating_sub(EDGE_LINKS) + 1, total_pages),
    ];

    let mut links = Vec::new();
    let mut last_linked = 0;
    for (start, end) in runs {
        let start = start.max(last_linked + 1);
        if start > end {
            continue;
        }
        if start > last_linked + 1 {
            links.push(None);
        }
        links.extend((start..=end).map(Some));
        last_linked = end;
    }
    links
}

/// The visible slice of a record set plus page-count metadata.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    /// May be zero; templates show [`PageResult::display_total_pages`].
    pub total_pages: usize,
    pub current_page: usize,
}

impl<T> PageResult<T> {
    /// Wraps a page that was already sliced upstream, clamping the page number.
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        Self {
            items,
            total_pages,
            current_page: clamp_page(current_page, total_pages),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 1, 0)
    }

    /// Page count as shown to users, never "page 1 of 0".
    pub fn display_total_pages(&self) -> usize {
        self.total_pages.max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Page numbers to link to, `None` standing for an ellipsis.
    pub fn links(&self) -> Vec<Option<usize>> {
        page_links(self.total_pages, self.current_page)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            current_page: self.current_page,
        }
    }
}

/// Cuts the `page`-th window of `page_size` items out of `items`.
pub fn slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> PageResult<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let current_page = clamp_page(page, total_pages);

    let start = ((current_page - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());

    PageResult {
        items: items[start..end].to_vec(),
        total_pages,
        current_page,
    }
}
