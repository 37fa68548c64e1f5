//! Request-level orchestration between routes, the gateway and the cache.

use std::sync::Arc;

use thiserror::Error;

use crate::cache::{CacheKey, QueryCache};
use crate::domain::auth::AdminSession;
use crate::dto::listing::ListQuery;
use crate::forms::FormError;
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::listing::controller::{CollectionDescriptor, CollectionView, normalize_filter};

pub mod auth;
pub mod categories;
pub mod customers;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod variants;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("backend error: {0}")]
    Gateway(GatewayError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<GatewayError> for ServiceError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Unauthorized => ServiceError::Unauthorized,
            GatewayError::NotFound => ServiceError::NotFound,
            other => ServiceError::Gateway(other),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.user_message())
    }
}

/// Only admins may use the dashboard.
pub fn ensure_admin(session: &AdminSession) -> ServiceResult<()> {
    if session.is_admin() {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Mounts a view and replays the request's query onto it.
///
/// A preselected filter (from the URL path) wins over the query string. When
/// the filter form reports a change, it goes through `set_filter_value` so
/// the collection's filter policy decides what happens to the search text,
/// and the requested page is dropped in favor of page 1.
pub fn prepare_view<R: Clone + 'static>(
    descriptor: CollectionDescriptor<R>,
    preselected: Option<String>,
    query: &ListQuery,
) -> CollectionView<R> {
    let requested = normalize_filter(query.filter.clone());
    let current = match (&preselected, &query.applied) {
        (Some(_), _) => preselected.clone(),
        (None, Some(applied)) => Some(applied.clone()),
        (None, None) => requested.clone(),
    };

    let mut view = CollectionView::mount_with_filter(descriptor, current);
    view.set_search_text(query.q.clone().unwrap_or_default());

    if preselected.is_none() && query.applied.is_some() && requested != view.state().filter_value
    {
        view.set_filter_value(requested);
    } else {
        view.set_page(query.page.unwrap_or(1));
    }
    view
}

/// Hands the full record set to a locally paginated view; the page chosen
/// by [`prepare_view`] is clamped into range.
pub fn run_client_view<R: Clone + 'static>(
    mut view: CollectionView<R>,
    records: Vec<R>,
) -> CollectionView<R> {
    if let Some(ticket) = view.begin_fetch() {
        view.complete_fetch(ticket, records);
    }
    view
}

/// Memoized read returning an owned copy of the cached value.
pub async fn cached<T, F, Fut>(cache: &QueryCache, key: CacheKey, fetch: F) -> ServiceResult<T>
where
    T: Clone + Send + Sync + 'static,
    F: FnOnce() -> Fut,
    Fut: Future<Output = GatewayResult<T>>,
{
    let value: Arc<T> = cache.get_or_fetch(key, fetch).await.map_err(|err| {
        log::error!("Failed to fetch from backend: {err}");
        ServiceError::from(err)
    })?;
    Ok(T::clone(&value))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::Customer;
    use crate::domain::order::Order;
    use crate::domain::types::{CustomerId, Email, OrderId, OrderStatus, PaymentStatus};
    use crate::listing::collections::{CUSTOMERS, ORDERS};

    fn order(id: i32, customer: &str, status: OrderStatus) -> Order {
        Order {
            id: OrderId::new(id).unwrap(),
            customer_name: customer.to_string(),
            items: Vec::new(),
            status,
            payment_status: PaymentStatus::Pending,
            created_at: None,
        }
    }

    #[test]
    fn non_admins_are_rejected() {
        assert!(ensure_admin(&test_support::admin()).is_ok());
        assert!(matches!(
            ensure_admin(&test_support::session("CUSTOMER")),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn gateway_auth_failures_become_unauthorized() {
        assert!(matches!(
            ServiceError::from(GatewayError::Unauthorized),
            ServiceError::Unauthorized
        ));
    }

    #[test]
    fn filter_change_keeps_search_for_orders() {
        let query = ListQuery {
            q: Some("ann".to_string()),
            filter: Some("SHIPPED".to_string()),
            applied: Some("all".to_string()),
            page: Some(3),
            ..ListQuery::default()
        };
        let view = prepare_view(ORDERS, None, &query);
        assert_eq!(view.state().search_text, "ann");
        assert_eq!(view.state().filter_value.as_deref(), Some("SHIPPED"));

        assert_eq!(view.state().page, 1);

        let view = run_client_view(
            view,
            vec![
                order(1, "Ann", OrderStatus::Shipped),
                order(2, "Ann", OrderStatus::Pending),
                order(3, "Bob", OrderStatus::Shipped),
            ],
        );
        let ids: Vec<i32> = view.result().items.iter().map(|o| o.id.get()).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(view.state().page, 1);
    }

    #[test]
    fn unchanged_filter_keeps_page_and_search() {
        let customers: Vec<Customer> = (1..=7)
            .map(|id| Customer {
                id: CustomerId::new(id).unwrap(),
                name: format!("Customer {id}"),
                email: Email::new(format!("c{id}@example.com")).unwrap(),
                created_at: None,
            })
            .collect();
        let view = prepare_view(CUSTOMERS, None, &ListQuery::default().page(2));
        let view = run_client_view(view, customers);
        assert_eq!(view.state().page, 2);
        assert_eq!(view.result().items.len(), 2);
    }
}
