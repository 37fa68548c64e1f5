use async_trait::async_trait;
use reqwest::Method;

use crate::domain::product::{ImageChange, NewProduct, Product, UpdateProduct};
use crate::domain::types::ProductId;
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::gateway::http::{HttpGateway, MultipartBody};
use crate::gateway::{ProductListQuery, ProductPage, ProductReader, ProductWriter};
use crate::models::product::{ProductEnvelope, ProductPage as ProductPageRow};

pub fn new_product_form(product: &NewProduct) -> MultipartBody {
    MultipartBody::new()
        .text("title", product.title.as_str())
        .text("description", product.description.as_str())
        .text("category_id", product.category_id.to_string())
        .image("image", product.image.clone())
}

pub fn update_product_form(updates: &UpdateProduct) -> MultipartBody {
    let body = MultipartBody::new()
        .text("title", updates.title.as_str())
        .text("description", updates.description.as_str())
        .text("category_id", updates.category_id.to_string())
        .text("status", updates.status.as_str());
    match &updates.image {
        ImageChange::Replace(image) => body.image("image", image.clone()),
        ImageChange::Keep(Some(url)) => body.text("imageurl", url.as_str()),
        ImageChange::Keep(None) => body,
    }
}

fn decode_envelope(envelope: Option<ProductEnvelope>) -> GatewayResult<Option<Product>> {
    envelope
        .and_then(|envelope| envelope.product)
        .map(|row| {
            Product::try_from(row)
                .map_err(|e| GatewayError::InvalidResponse(format!("product: {e}")))
        })
        .transpose()
}

#[async_trait]
impl ProductReader for HttpGateway {
    async fn list_products(&self, query: ProductListQuery) -> GatewayResult<ProductPage> {
        let page: ProductPageRow = self
            .get_with_query("products/", &query.to_query_pairs())
            .await?;

        let products = page
            .products
            .into_iter()
            .map(|row| {
                Product::try_from(row)
                    .map_err(|e| GatewayError::InvalidResponse(format!("product: {e}")))
            })
            .collect::<GatewayResult<Vec<_>>>()?;

        Ok(ProductPage {
            // Older backends omit the count; treat the answer as one page.
            total_pages: page
                .total_pages
                .map(|total| total as usize)
                .unwrap_or(usize::from(!products.is_empty())),
            products,
        })
    }
}

#[async_trait]
impl ProductWriter for HttpGateway {
    async fn create_product(&self, product: &NewProduct) -> GatewayResult<Option<Product>> {
        let envelope: Option<ProductEnvelope> = self
            .send_multipart(
                Method::POST,
                "products/admin/products",
                new_product_form(product),
            )
            .await?;
        decode_envelope(envelope)
    }

    async fn update_product(
        &self,
        product_id: ProductId,
        updates: &UpdateProduct,
    ) -> GatewayResult<Option<Product>> {
        let envelope: Option<ProductEnvelope> = self
            .send_multipart(
                Method::PUT,
                &format!("products/admin/products/{product_id}"),
                update_product_form(updates),
            )
            .await?;
        decode_envelope(envelope)
    }

    async fn delete_product(&self, product_id: ProductId) -> GatewayResult<()> {
        self.delete(&format!("products/admin/products/{product_id}"))
            .await
    }
}
