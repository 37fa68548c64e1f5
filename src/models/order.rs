use serde::Deserialize;

use crate::domain::order::{Order as DomainOrder, OrderItem as DomainOrderItem};
use crate::domain::types::{OrderId, OrderStatus, PaymentStatus, TypeConstraintError};
use crate::models::wire::{WireNumber, parse_optional_timestamp};

#[derive(Debug, Clone, Deserialize)]
pub struct OrderItem {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<WireNumber>,
    #[serde(default)]
    pub price: Option<WireNumber>,
}

impl TryFrom<OrderItem> for DomainOrderItem {
    type Error = TypeConstraintError;

    fn try_from(row: OrderItem) -> Result<Self, Self::Error> {
        Ok(Self {
            product_name: row.product_name.unwrap_or_default(),
            quantity: row.quantity.map(|q| q.as_count()).transpose()?.unwrap_or(1),
            price: row
                .price
                .map(|p| p.as_amount())
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

/// Order row of `GET /order/admin/orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    pub id: WireNumber,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub status: String,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

impl TryFrom<Order> for DomainOrder {
    type Error = TypeConstraintError;

    fn try_from(row: Order) -> Result<Self, Self::Error> {
        let payment_status = match row.payment_status.as_deref() {
            Some(status) if !status.trim().is_empty() => status.parse()?,
            _ => PaymentStatus::Pending,
        };

        Ok(Self {
            id: OrderId::new(row.id.as_i32()?)?,
            customer_name: row.customer_name.unwrap_or_default(),
            items: row
                .items
                .into_iter()
                .map(DomainOrderItem::try_from)
                .collect::<Result<_, _>>()?,
            status: row.status.parse::<OrderStatus>()?,
            payment_status,
            created_at: parse_optional_timestamp(row.created_at.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OrderList {
    Bare(Vec<Order>),
    Wrapped { orders: Vec<Order> },
}

impl OrderList {
    pub fn into_rows(self) -> Vec<Order> {
        match self {
            OrderList::Bare(rows) | OrderList::Wrapped { orders: rows } => rows,
        }
    }
}
