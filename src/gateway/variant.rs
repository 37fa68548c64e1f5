use async_trait::async_trait;
use reqwest::Method;

use crate::domain::types::{ProductId, VariantId};
use crate::domain::variant::{NewVariant, UpdateVariant, Variant};
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::gateway::http::{HttpGateway, MultipartBody};
use crate::gateway::{VariantReader, VariantWriter};
use crate::models::product::ProductDetail;
use crate::models::variant::{Variant as VariantRow, VariantEnvelope, VariantList};

fn flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

pub fn new_variant_form(variant: &NewVariant) -> GatewayResult<MultipartBody> {
    let body = MultipartBody::new()
        .text("product_id", variant.product_id.to_string())
        .text("name", variant.name.as_str())
        .text("description", variant.description.as_str())
        .json("size_options", &variant.size_options)?
        .text("is_best_selling", flag(variant.is_best_selling));
    Ok(variant
        .images
        .iter()
        .cloned()
        .fold(body, |body, image| body.image("images", image)))
}

pub fn update_variant_form(updates: &UpdateVariant) -> GatewayResult<MultipartBody> {
    let body = MultipartBody::new()
        .text("name", updates.name.as_str())
        .text("description", updates.description.as_str())
        .json("size_options", &updates.size_options)?
        .text("is_best_selling", flag(updates.is_best_selling))
        .json("existingImages", &updates.existing_images)?;
    Ok(updates
        .images
        .iter()
        .cloned()
        .fold(body, |body, image| body.image("images", image)))
}

fn decode_rows(rows: Vec<VariantRow>) -> GatewayResult<Vec<Variant>> {
    rows.into_iter()
        .map(|row| {
            Variant::try_from(row)
                .map_err(|e| GatewayError::InvalidResponse(format!("variant: {e}")))
        })
        .collect()
}

#[async_trait]
impl VariantReader for HttpGateway {
    async fn list_variants(&self) -> GatewayResult<Vec<Variant>> {
        let list: VariantList = self.get("variants/product/variants").await?;
        decode_rows(list.into_rows())
    }

    async fn list_product_variants(&self, product_id: ProductId) -> GatewayResult<Vec<Variant>> {
        let detail: ProductDetail = self.get(&format!("products/{product_id}")).await?;
        decode_rows(detail.variants)
    }
}

#[async_trait]
impl VariantWriter for HttpGateway {
    async fn create_variant(&self, variant: &NewVariant) -> GatewayResult<Option<Variant>> {
        let envelope: Option<VariantEnvelope> = self
            .send_multipart(
                Method::POST,
                "variants/admin/variants",
                new_variant_form(variant)?,
            )
            .await?;
        envelope
            .and_then(|envelope| envelope.variant)
            .map(|row| {
                Variant::try_from(row)
                    .map_err(|e| GatewayError::InvalidResponse(format!("variant: {e}")))
            })
            .transpose()
    }

    async fn update_variant(
        &self,
        variant_id: VariantId,
        updates: &UpdateVariant,
    ) -> GatewayResult<()> {
        self.send_multipart_empty(
            Method::PUT,
            &format!("variants/admin/variants/{variant_id}"),
            update_variant_form(updates)?,
        )
        .await
    }
}
