//! Customer list and deletion.

use crate::cache::{CacheKey, Collection, QueryCache};
use crate::domain::auth::AdminSession;
use crate::domain::types::CustomerId;
use crate::dto::customers::CustomersPageData;
use crate::dto::listing::{ListPage, ListQuery};
use crate::gateway::{CustomerReader, CustomerWriter};
use crate::listing::collections::CUSTOMERS;
use crate::mutation::{MutationBridge, MutationOutcome};
use crate::services::{ServiceResult, cached, ensure_admin, prepare_view, run_client_view};

/// Loads every customer and renders the requested page locally.
pub async fn load_customers_page<G>(
    gateway: &G,
    cache: &QueryCache,
    session: &AdminSession,
    query: &ListQuery,
) -> ServiceResult<CustomersPageData>
where
    G: CustomerReader + ?Sized,
{
    ensure_admin(session)?;

    let customers = cached(cache, CacheKey::all(Collection::Customers), || {
        gateway.list_customers()
    })
    .await?;

    let view = run_client_view(prepare_view(CUSTOMERS, None, query), customers);

    Ok(CustomersPageData {
        customers: ListPage::from_view(view, |customer| customer),
    })
}

pub async fn delete_customer<G>(
    gateway: &G,
    cache: &QueryCache,
    session: &AdminSession,
    customer_id: i32,
) -> ServiceResult<MutationOutcome>
where
    G: CustomerWriter + ?Sized,
{
    ensure_admin(session)?;

    let customer_id = CustomerId::new(customer_id)?;

    let bridge = MutationBridge::new(cache, &[Collection::Customers], "Failed to delete customer");
    Ok(bridge.submit(gateway.delete_customer(customer_id)).await)
}
