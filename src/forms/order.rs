use serde::Deserialize;

use crate::domain::order::OrderStatusUpdate;
use crate::forms::FormError;

#[derive(Deserialize)]
/// Status modal of the orders table.
pub struct UpdateOrderStatusForm {
    pub status: String,
    pub payment_status: String,
}

impl TryFrom<UpdateOrderStatusForm> for OrderStatusUpdate {
    type Error = FormError;

    fn try_from(form: UpdateOrderStatusForm) -> Result<Self, Self::Error> {
        Ok(Self {
            status: form.status.parse()?,
            payment_status: form.payment_status.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{OrderStatus, PaymentStatus};

    #[test]
    fn statuses_are_parsed() {
        let update = OrderStatusUpdate::try_from(UpdateOrderStatusForm {
            status: "delivered".to_string(),
            payment_status: "PAID".to_string(),
        })
        .unwrap();
        assert_eq!(update.status, OrderStatus::Delivered);
        assert_eq!(update.payment_status, PaymentStatus::Paid);
    }

    #[test]
    fn unknown_status_is_a_form_error() {
        assert!(
            OrderStatusUpdate::try_from(UpdateOrderStatusForm {
                status: "LOST".to_string(),
                payment_status: "PAID".to_string(),
            })
            .is_err()
        );
    }
}
