//! Mock gateway for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::analytics::{DashboardStats, SalesPoint};
use crate::domain::auth::{AdminSession, Credentials};
use crate::domain::category::{Category, NewCategory};
use crate::domain::customer::Customer;
use crate::domain::order::{Order, OrderStatusUpdate};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::review::Review;
use crate::domain::types::{CustomerId, OrderId, ProductId, ReviewId, VariantId};
use crate::domain::variant::{NewVariant, UpdateVariant, Variant};
use crate::gateway::errors::GatewayResult;
use crate::gateway::{
    AnalyticsReader, AuthGateway, CategoryReader, CategoryWriter, CustomerReader, CustomerWriter,
    OrderReader, OrderWriter, ProductListQuery, ProductPage, ProductReader, ProductWriter,
    ReviewReader, ReviewWriter, VariantReader, VariantWriter,
};

mock! {
    pub Gateway {}

    #[async_trait]
    impl AuthGateway for Gateway {
        async fn login(&self, credentials: &Credentials) -> GatewayResult<AdminSession>;
    }

    #[async_trait]
    impl CategoryReader for Gateway {
        async fn list_categories(&self) -> GatewayResult<Vec<Category>>;
    }

    #[async_trait]
    impl CategoryWriter for Gateway {
        async fn create_category(&self, category: &NewCategory) -> GatewayResult<Option<Category>>;
    }

    #[async_trait]
    impl ProductReader for Gateway {
        async fn list_products(&self, query: ProductListQuery) -> GatewayResult<ProductPage>;
    }

    #[async_trait]
    impl ProductWriter for Gateway {
        async fn create_product(&self, product: &NewProduct) -> GatewayResult<Option<Product>>;
        async fn update_product(
            &self,
            product_id: ProductId,
            updates: &UpdateProduct,
        ) -> GatewayResult<Option<Product>>;
        async fn delete_product(&self, product_id: ProductId) -> GatewayResult<()>;
    }

    #[async_trait]
    impl VariantReader for Gateway {
        async fn list_variants(&self) -> GatewayResult<Vec<Variant>>;
        async fn list_product_variants(&self, product_id: ProductId) -> GatewayResult<Vec<Variant>>;
    }

    #[async_trait]
    impl VariantWriter for Gateway {
        async fn create_variant(&self, variant: &NewVariant) -> GatewayResult<Option<Variant>>;
        async fn update_variant(
            &self,
            variant_id: VariantId,
            updates: &UpdateVariant,
        ) -> GatewayResult<()>;
    }

    #[async_trait]
    impl OrderReader for Gateway {
        async fn list_orders(&self) -> GatewayResult<Vec<Order>>;
    }

    #[async_trait]
    impl OrderWriter for Gateway {
        async fn update_order_status(
            &self,
            order_id: OrderId,
            update: OrderStatusUpdate,
        ) -> GatewayResult<()>;
    }

    #[async_trait]
    impl CustomerReader for Gateway {
        async fn list_customers(&self) -> GatewayResult<Vec<Customer>>;
    }

    #[async_trait]
    impl CustomerWriter for Gateway {
        async fn delete_customer(&self, customer_id: CustomerId) -> GatewayResult<()>;
    }

    #[async_trait]
    impl ReviewReader for Gateway {
        async fn list_reviews(&self) -> GatewayResult<Vec<Review>>;
    }

    #[async_trait]
    impl ReviewWriter for Gateway {
        async fn delete_review(&self, review_id: ReviewId) -> GatewayResult<()>;
    }

    #[async_trait]
    impl AnalyticsReader for Gateway {
        async fn dashboard_stats(&self) -> GatewayResult<DashboardStats>;
        async fn monthly_sales(&self) -> GatewayResult<Vec<SalesPoint>>;
        async fn daily_sales(&self, days: u32) -> GatewayResult<Vec<SalesPoint>>;
    }
}
