//! Access to the storefront REST backend.
//!
//! Services depend on the reader/writer traits below; [`http::HttpGateway`]
//! implements all of them over reqwest and tests use [`mock::MockGateway`].

use async_trait::async_trait;

use crate::domain::analytics::{DashboardStats, SalesPoint};
use crate::domain::auth::{AdminSession, Credentials};
use crate::domain::category::{Category, NewCategory};
use crate::domain::customer::Customer;
use crate::domain::order::{Order, OrderStatusUpdate};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::review::Review;
use crate::domain::types::{CategoryId, CustomerId, OrderId, ProductId, ReviewId, VariantId};
use crate::domain::variant::{NewVariant, UpdateVariant, Variant};
use crate::gateway::errors::GatewayResult;

pub mod analytics;
pub mod auth;
pub mod category;
pub mod customer;
pub mod errors;
pub mod http;
#[cfg(test)]
pub mod mock;
pub mod order;
pub mod product;
pub mod review;
pub mod variant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Server-side product listing parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListQuery {
    pub category_id: Option<CategoryId>,
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    /// Query-string pairs in the order the backend documents them.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(pagination) = &self.pagination {
            pairs.push(("page", pagination.page.to_string()));
            pairs.push(("limit", pagination.per_page.to_string()));
        }
        if let Some(category_id) = self.category_id {
            pairs.push(("category", category_id.to_string()));
        }
        pairs
    }

    /// Stable cache key suffix for this query.
    pub fn cache_params(&self) -> String {
        self.to_query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// One server-rendered page of products.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total_pages: usize,
}

#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> GatewayResult<AdminSession>;
}

#[async_trait]
pub trait CategoryReader: Send + Sync {
    async fn list_categories(&self) -> GatewayResult<Vec<Category>>;
}

#[async_trait]
pub trait CategoryWriter: Send + Sync {
    async fn create_category(&self, category: &NewCategory) -> GatewayResult<Option<Category>>;
}

#[async_trait]
pub trait ProductReader: Send + Sync {
    async fn list_products(&self, query: ProductListQuery) -> GatewayResult<ProductPage>;
}

#[async_trait]
pub trait ProductWriter: Send + Sync {
    async fn create_product(&self, product: &NewProduct) -> GatewayResult<Option<Product>>;
    async fn update_product(
        &self,
        product_id: ProductId,
        updates: &UpdateProduct,
    ) -> GatewayResult<Option<Product>>;
    async fn delete_product(&self, product_id: ProductId) -> GatewayResult<()>;
}

#[async_trait]
pub trait VariantReader: Send + Sync {
    async fn list_variants(&self) -> GatewayResult<Vec<Variant>>;
    async fn list_product_variants(&self, product_id: ProductId) -> GatewayResult<Vec<Variant>>;
}

#[async_trait]
pub trait VariantWriter: Send + Sync {
    async fn create_variant(&self, variant: &NewVariant) -> GatewayResult<Option<Variant>>;
    async fn update_variant(
        &self,
        variant_id: VariantId,
        updates: &UpdateVariant,
    ) -> GatewayResult<()>;
}

#[async_trait]
pub trait OrderReader: Send + Sync {
    async fn list_orders(&self) -> GatewayResult<Vec<Order>>;
}

#[async_trait]
pub trait OrderWriter: Send + Sync {
    async fn update_order_status(
        &self,
        order_id: OrderId,
        update: OrderStatusUpdate,
    ) -> GatewayResult<()>;
}

#[async_trait]
pub trait CustomerReader: Send + Sync {
    async fn list_customers(&self) -> GatewayResult<Vec<Customer>>;
}

#[async_trait]
pub trait CustomerWriter: Send + Sync {
    async fn delete_customer(&self, customer_id: CustomerId) -> GatewayResult<()>;
}

#[async_trait]
pub trait ReviewReader: Send + Sync {
    async fn list_reviews(&self) -> GatewayResult<Vec<Review>>;
}

#[async_trait]
pub trait ReviewWriter: Send + Sync {
    async fn delete_review(&self, review_id: ReviewId) -> GatewayResult<()>;
}

#[async_trait]
pub trait AnalyticsReader: Send + Sync {
    async fn dashboard_stats(&self) -> GatewayResult<DashboardStats>;
    async fn monthly_sales(&self) -> GatewayResult<Vec<SalesPoint>>;
    async fn daily_sales(&self, days: u32) -> GatewayResult<Vec<SalesPoint>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_query_serializes_in_documented_order() {
        let query = ProductListQuery::new()
            .category(CategoryId::new(3).unwrap())
            .paginate(2, 10);
        assert_eq!(query.cache_params(), "page=2&limit=10&category=3");
    }

    #[test]
    fn unpaged_query_has_no_parameters() {
        let query = ProductListQuery::new();
        assert!(query.to_query_pairs().is_empty());
        assert_eq!(query.cache_params(), "");
    }
}
