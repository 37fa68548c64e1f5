use serde::Serialize;

use crate::domain::order::Order;
use crate::domain::types::{OrderStatus, PaymentStatus};
use crate::dto::listing::ListPage;

#[derive(Debug, Clone, Serialize)]
pub struct OrderRow {
    pub order: Order,
    pub total: String,
    pub item_count: u32,
}

impl From<Order> for OrderRow {
    fn from(order: Order) -> Self {
        Self {
            total: format!("{:.2}", order.total()),
            item_count: order.items.iter().map(|item| item.quantity).sum(),
            order,
        }
    }
}

/// Data required to render the orders template.
#[derive(Debug, Clone, Serialize)]
pub struct OrdersPageData {
    pub orders: ListPage<OrderRow>,
    pub statuses: &'static [OrderStatus],
    pub payment_statuses: &'static [PaymentStatus],
}
