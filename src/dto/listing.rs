use serde::{Deserialize, Serialize};

use crate::listing::controller::{CollectionView, FilterPolicy};

/// Query string of every list page.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ListQuery {
    /// Search text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Requested filter value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Filter that was active when the filter form was submitted. When it
    /// differs from `filter` the request is a filter change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied: Option<String>,
    /// Payment status filter of the orders page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<String>,
    /// Payment filter active when the filter form was submitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_payment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
}

impl ListQuery {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            q: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn filter(mut self, value: impl Into<String>) -> Self {
        self.filter = Some(value.into());
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// `path` with this query state appended, for redirecting back to a list
    /// after a form post.
    ///
    /// Filters are marked as already applied so the list reopens on the same
    /// page instead of treating the redirect as a filter change.
    pub fn return_to(&self, path: &str) -> String {
        let state = ListQuery {
            q: self.q.clone().filter(|q| !q.trim().is_empty()),
            filter: self.filter.clone(),
            applied: self.filter.clone(),
            payment: self.payment.clone(),
            applied_payment: self.payment.clone(),
            page: self.page,
        };

        match serde_html_form::to_string(&state) {
            Ok(query) if query.is_empty() => path.to_string(),
            Ok(query) => format!("{path}?{query}"),
            Err(err) => {
                log::warn!("Failed to encode list state for {path}: {err}");
                path.to_string()
            }
        }
    }
}

/// One rendered page of a list view, ready for the template.
#[derive(Debug, Clone, Serialize)]
pub struct ListPage<T> {
    pub collection: &'static str,
    pub items: Vec<T>,
    pub current_page: usize,
    /// Never zero; an empty list still reads "page 1 of 1".
    pub total_pages: usize,
    pub links: Vec<Option<usize>>,
    pub has_previous: bool,
    pub has_next: bool,
    pub is_empty: bool,
    pub search: String,
    pub filter: Option<String>,
    /// Payment status filter; only the orders page sets it.
    pub payment: Option<String>,
    /// Whether the filter form carries the search text along.
    pub keeps_search: bool,
    /// Query string appended to form actions so a post lands back on this
    /// exact page.
    pub return_query: String,
}

impl<T> ListPage<T> {
    /// Renders `view`'s visible page, mapping each record with `f`.
    pub fn from_view<R: Clone + 'static>(view: CollectionView<R>, f: impl FnMut(R) -> T) -> Self {
        let collection = view.descriptor().name;
        let keeps_search = view.descriptor().filter_policy == FilterPolicy::KeepsSearch;
        let state = view.state().clone();
        let is_empty = view.is_empty();
        let result = view.into_result();

        let mut page = Self {
            collection,
            current_page: result.current_page,
            total_pages: result.display_total_pages(),
            links: result.links(),
            has_previous: result.has_previous(),
            has_next: result.has_next(),
            is_empty,
            search: state.search_text,
            filter: state.filter_value,
            payment: None,
            keeps_search,
            return_query: String::new(),
            items: result.map(f).items,
        };
        page.return_query = page.state().return_to("");
        page
    }

    pub fn with_payment(mut self, payment: Option<String>) -> Self {
        self.payment = payment;
        self.return_query = self.state().return_to("");
        self
    }

    /// The query that reopens this page.
    pub fn state(&self) -> ListQuery {
        ListQuery {
            q: Some(self.search.clone()),
            filter: self.filter.clone(),
            applied: self.filter.clone(),
            payment: self.payment.clone(),
            applied_payment: self.payment.clone(),
            page: Some(self.current_page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_to_keeps_search_filter_and_page() {
        let query = ListQuery::search("al").filter("3").page(2);
        assert_eq!(
            query.return_to("/products"),
            "/products?q=al&filter=3&applied=3&page=2"
        );
    }

    #[test]
    fn return_to_marks_payment_filter_applied() {
        let query = ListQuery {
            payment: Some("PAID".to_string()),
            applied_payment: Some("all".to_string()),
            ..ListQuery::default()
        };
        assert_eq!(
            query.return_to("/orders"),
            "/orders?payment=PAID&applied_payment=PAID"
        );
    }

    #[test]
    fn return_to_without_state_is_the_bare_path() {
        assert_eq!(ListQuery::search("  ").return_to("/customers"), "/customers");
        assert_eq!(ListQuery::default().return_to("/reviews"), "/reviews");
    }

    #[test]
    fn rendered_page_carries_its_own_state() {
        use crate::listing::collections::CUSTOMERS;

        let mut view = CollectionView::mount(CUSTOMERS);
        view.set_search_text("al");
        let page: ListPage<()> = ListPage::from_view(view, |_| ()).with_payment(None);
        assert_eq!(page.return_query, "?q=al&page=1");
    }

    #[test]
    fn search_text_is_encoded() {
        assert_eq!(
            ListQuery::search("a&b c").return_to("/reviews"),
            "/reviews?q=a%26b+c"
        );
    }
}
