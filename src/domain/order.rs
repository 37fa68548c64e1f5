use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{Amount, OrderId, OrderStatus, PaymentStatus};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct OrderItem {
    pub product_name: String,
    pub quantity: u32,
    pub price: Amount,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub created_at: Option<NaiveDateTime>,
}

impl Order {
    /// Sum of `price * quantity` over all lines.
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price.get() * f64::from(item.quantity))
            .sum()
    }
}

/// Body of `PUT /order/admin/order/{id}`.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_multiplies_quantities() {
        let order = Order {
            id: OrderId::new(1).unwrap(),
            customer_name: "Ann".to_string(),
            items: vec![
                OrderItem {
                    product_name: "Shirt".to_string(),
                    quantity: 2,
                    price: Amount::new(10.0).unwrap(),
                },
                OrderItem {
                    product_name: "Belt".to_string(),
                    quantity: 1,
                    price: Amount::new(5.5).unwrap(),
                },
            ],
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Pending,
            created_at: None,
        };
        assert_eq!(order.total(), 25.5);
    }

    #[test]
    fn status_update_serializes_to_wire_values() {
        let update = OrderStatusUpdate {
            status: OrderStatus::Shipped,
            payment_status: PaymentStatus::Paid,
        };
        let json = serde_json::to_value(update).unwrap();
        assert_eq!(json["status"], "SHIPPED");
        assert_eq!(json["payment_status"], "PAID");
    }
}
