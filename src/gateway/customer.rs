use async_trait::async_trait;

use crate::domain::customer::Customer;
use crate::domain::types::CustomerId;
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::gateway::http::HttpGateway;
use crate::gateway::{CustomerReader, CustomerWriter};
use crate::models::customer::CustomerList;

#[async_trait]
impl CustomerReader for HttpGateway {
    async fn list_customers(&self) -> GatewayResult<Vec<Customer>> {
        let list: CustomerList = self.get("customer/customers").await?;
        list.users
            .into_iter()
            .map(|row| {
                Customer::try_from(row)
                    .map_err(|e| GatewayError::InvalidResponse(format!("customer: {e}")))
            })
            .collect()
    }
}

#[async_trait]
impl CustomerWriter for HttpGateway {
    async fn delete_customer(&self, customer_id: CustomerId) -> GatewayResult<()> {
        self.delete(&format!("customer/customer/{customer_id}")).await
    }
}
