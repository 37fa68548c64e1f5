use async_trait::async_trait;

use crate::domain::order::{Order, OrderStatusUpdate};
use crate::domain::types::OrderId;
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::gateway::http::HttpGateway;
use crate::gateway::{OrderReader, OrderWriter};
use crate::models::order::OrderList;

#[async_trait]
impl OrderReader for HttpGateway {
    async fn list_orders(&self) -> GatewayResult<Vec<Order>> {
        let list: OrderList = self.get("order/admin/orders").await?;
        list.into_rows()
            .into_iter()
            .map(|row| {
                Order::try_from(row)
                    .map_err(|e| GatewayError::InvalidResponse(format!("order: {e}")))
            })
            .collect()
    }
}

#[async_trait]
impl OrderWriter for HttpGateway {
    async fn update_order_status(
        &self,
        order_id: OrderId,
        update: OrderStatusUpdate,
    ) -> GatewayResult<()> {
        self.put_json(&format!("order/admin/order/{order_id}"), &update)
            .await
    }
}
