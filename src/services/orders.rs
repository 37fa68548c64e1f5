//! Order list with status and payment filters, and status updates.

use crate::cache::{CacheKey, Collection, QueryCache};
use crate::domain::auth::AdminSession;
use crate::domain::order::{Order, OrderStatusUpdate};
use crate::domain::types::{OrderId, OrderStatus, PaymentStatus};
use crate::dto::listing::{ListPage, ListQuery};
use crate::dto::orders::{OrderRow, OrdersPageData};
use crate::forms::order::UpdateOrderStatusForm;
use crate::gateway::{OrderReader, OrderWriter};
use crate::listing::collections::ORDERS;
use crate::listing::controller::normalize_filter;
use crate::mutation::{MutationBridge, MutationOutcome};
use crate::services::{ServiceResult, cached, ensure_admin, prepare_view, run_client_view};

/// Status filter values compare against the backend's upper-case spelling.
fn status_filter(value: &Option<String>) -> Option<String> {
    value.as_ref().map(|v| v.trim().to_uppercase())
}

/// Unknown payment values mean no payment filter.
fn payment_filter(value: &Option<String>) -> Option<PaymentStatus> {
    let value = normalize_filter(value.clone())?;
    match value.parse::<PaymentStatus>() {
        Ok(status) => Some(status),
        Err(err) => {
            log::debug!("Ignoring payment filter: {err}");
            None
        }
    }
}

pub async fn load_orders_page<G>(
    gateway: &G,
    cache: &QueryCache,
    session: &AdminSession,
    query: &ListQuery,
) -> ServiceResult<OrdersPageData>
where
    G: OrderReader + ?Sized,
{
    ensure_admin(session)?;

    let orders = cached(cache, CacheKey::all(Collection::Orders), || {
        gateway.list_orders()
    })
    .await?;

    let payment = payment_filter(&query.payment);
    let payment_changed =
        query.applied_payment.is_some() && payment_filter(&query.applied_payment) != payment;
    let orders: Vec<Order> = match payment {
        Some(payment) => orders
            .into_iter()
            .filter(|order| order.payment_status == payment)
            .collect(),
        None => orders,
    };

    let query = ListQuery {
        filter: status_filter(&query.filter),
        applied: status_filter(&query.applied),
        page: if payment_changed { None } else { query.page },
        ..query.clone()
    };
    let view = run_client_view(prepare_view(ORDERS, None, &query), orders);

    Ok(OrdersPageData {
        orders: ListPage::from_view(view, OrderRow::from)
            .with_payment(payment.map(|status| status.as_str().to_string())),
        statuses: OrderStatus::ALL,
        payment_statuses: PaymentStatus::ALL,
    })
}

pub async fn update_order_status<G>(
    gateway: &G,
    cache: &QueryCache,
    session: &AdminSession,
    order_id: i32,
    form: UpdateOrderStatusForm,
) -> ServiceResult<MutationOutcome>
where
    G: OrderWriter + ?Sized,
{
    ensure_admin(session)?;

    let order_id = OrderId::new(order_id)?;
    let update = OrderStatusUpdate::try_from(form)?;

    let bridge = MutationBridge::new(cache, &[Collection::Orders], "Failed to update order status");
    Ok(bridge.submit(gateway.update_order_status(order_id, update)).await)
}
