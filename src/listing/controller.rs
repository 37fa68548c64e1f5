//! The collection view controller: one reducer shared by every list page.
//!
//! A [`CollectionView`] owns the query state of one mounted view (search text,
//! active filter, page number) together with the last record set it was given,
//! and keeps the derived [`PageResult`] in sync after every transition. It never
//! suspends; fetching is the caller's job, guided by [`CollectionView::fetch_params`].

use serde::Serialize;

use crate::listing::pages::{PageResult, clamp_page, slice, total_pages};
use crate::listing::search::{FieldAccessor, matches_normalized, normalize_query};

/// Where filtering and pagination happen for a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationMode {
    /// The backend filters and slices; the view renders what it gets.
    Server,
    /// The backend returns the full set; the view filters and slices it.
    Client,
}

/// What selecting a filter does to an active search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterPolicy {
    ClearsSearch,
    KeepsSearch,
}

/// Static configuration of one collection.
pub struct CollectionDescriptor<R: 'static> {
    pub name: &'static str,
    pub fields: &'static [FieldAccessor<R>],
    /// Field compared for equality with the filter value, if filtering is supported.
    pub filter_field: Option<FieldAccessor<R>>,
    pub pagination_mode: PaginationMode,
    pub page_size: usize,
    pub filter_policy: FilterPolicy,
}

impl<R: 'static> Clone for CollectionDescriptor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static> Copy for CollectionDescriptor<R> {}

/// Search text, active filter and current page of one view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueryState {
    pub search_text: String,
    pub filter_value: Option<String>,
    pub page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            filter_value: None,
            page: 1,
        }
    }
}

/// Blank values and the `all` sentinel of filter selects mean "no filter".
pub fn normalize_filter(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

/// A fetch result handed to the controller.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordSet<R> {
    /// Every record of the collection; filtered and sliced locally.
    Full(Vec<R>),
    /// One page already filtered and sliced by the backend.
    Page { items: Vec<R>, total_pages: usize },
}

impl<R> From<Vec<R>> for RecordSet<R> {
    fn from(records: Vec<R>) -> Self {
        RecordSet::Full(records)
    }
}

/// What the caller should ask the backend for. Search text never leaves the
/// dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchParams {
    pub filter_value: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// Identifies one fetch started by a view; stale tickets are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

pub struct CollectionView<R: 'static> {
    descriptor: CollectionDescriptor<R>,
    state: QueryState,
    /// `None` until the first fetch completes.
    records: Option<RecordSet<R>>,
    filtered_len: usize,
    result: PageResult<R>,
    generation: u64,
    torn_down: bool,
}

impl<R: Clone + 'static> CollectionView<R> {
    /// Mounts a view with the default empty query state.
    pub fn mount(descriptor: CollectionDescriptor<R>) -> Self {
        Self::mount_with_filter(descriptor, None)
    }

    /// Mounts a view whose filter is preselected by the caller.
    pub fn mount_with_filter(descriptor: CollectionDescriptor<R>, filter: Option<String>) -> Self {
        let state = QueryState {
            filter_value: normalize_filter(filter),
            ..QueryState::default()
        };
        let mut view = Self {
            descriptor,
            state,
            records: None,
            filtered_len: 0,
            result: PageResult::empty(),
            generation: 0,
            torn_down: false,
        };
        view.recompute();
        view
    }

    pub fn descriptor(&self) -> &CollectionDescriptor<R> {
        &self.descriptor
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn result(&self) -> &PageResult<R> {
        &self.result
    }

    /// Number of records left after search and filter: across all pages for
    /// locally filtered sets, on the current page for server pages.
    pub fn filtered_len(&self) -> usize {
        self.filtered_len
    }

    /// Zero matching records: an explicit empty state, not an error.
    pub fn is_empty(&self) -> bool {
        self.filtered_len == 0
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
        self.state.page = 1;
        self.recompute();
    }

    pub fn set_filter_value(&mut self, value: Option<String>) {
        self.state.filter_value = normalize_filter(value);
        self.state.page = 1;
        if self.descriptor.filter_policy == FilterPolicy::ClearsSearch {
            self.state.search_text.clear();
        }
        self.recompute();
    }

    /// Moves to page `page`, clamped into the known page range.
    pub fn set_page(&mut self, page: usize) {
        self.state.page = match self.known_total_pages() {
            Some(total) => clamp_page(page, total),
            None => page.max(1),
        };
        self.recompute();
    }

    pub fn next_page(&mut self) {
        self.set_page(self.state.page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.state.page.saturating_sub(1));
    }

    /// Replaces the record set (e.g. after a refetch) keeping search and filter.
    pub fn on_record_set_changed(&mut self, records: impl Into<RecordSet<R>>) {
        self.records = Some(records.into());
        self.recompute();
    }

    /// Starts a fetch; `None` once the view has been torn down.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.torn_down {
            return None;
        }
        self.generation += 1;
        Some(FetchTicket(self.generation))
    }

    /// Applies a fetch result unless the view is gone or a newer fetch started.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        records: impl Into<RecordSet<R>>,
    ) -> bool {
        if self.torn_down || ticket.0 != self.generation {
            return false;
        }
        self.on_record_set_changed(records);
        true
    }

    /// Discards the view; later fetch results become no-ops.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.records = None;
        self.result = PageResult::empty();
        self.filtered_len = 0;
    }

    pub fn fetch_params(&self) -> FetchParams {
        match self.descriptor.pagination_mode {
            PaginationMode::Server => FetchParams {
                filter_value: self.state.filter_value.clone(),
                page: Some(self.state.page),
                page_size: Some(self.descriptor.page_size.max(1)),
            },
            PaginationMode::Client => FetchParams {
                filter_value: self.state.filter_value.clone(),
                page: None,
                page_size: None,
            },
        }
    }

    /// Consumes the view returning the visible page.
    pub fn into_result(self) -> PageResult<R> {
        self.result
    }

    fn known_total_pages(&self) -> Option<usize> {
        self.records.as_ref().map(|_| self.result.total_pages)
    }

    fn passes_filter(&self, record: &R) -> bool {
        match (&self.state.filter_value, self.descriptor.filter_field) {
            (Some(expected), Some(field)) => {
                field(record).is_some_and(|value| value.trim() == expected.as_str())
            }
            _ => true,
        }
    }

    fn recompute(&mut self) {
        match &self.records {
            None => {
                self.filtered_len = 0;
                self.result = PageResult {
                    items: Vec::new(),
                    total_pages: 0,
                    current_page: self.state.page,
                };
            }
            Some(RecordSet::Full(records)) => {
                let query = normalize_query(&self.state.search_text);
                let filtered: Vec<R> = records
                    .iter()
                    .filter(|record| {
                        self.passes_filter(record)
                            && matches_normalized(&query, *record, self.descriptor.fields)
                    })
                    .cloned()
                    .collect();
                let page_size = self.descriptor.page_size.max(1);
                let pages = total_pages(filtered.len(), page_size);
                self.state.page = clamp_page(self.state.page, pages);
                self.filtered_len = filtered.len();
                self.result = slice(&filtered, self.state.page, page_size);
            }
            Some(RecordSet::Page { items, total_pages }) => {
                self.state.page = clamp_page(self.state.page, *total_pages);
                self.filtered_len = items.len();
                self.result = PageResult::new(items.clone(), self.state.page, *total_pages);
            }
        }
    }
}
