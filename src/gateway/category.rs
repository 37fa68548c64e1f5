use async_trait::async_trait;
use reqwest::Method;

use crate::domain::category::{Category, NewCategory};
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::gateway::http::{HttpGateway, MultipartBody};
use crate::gateway::{CategoryReader, CategoryWriter};
use crate::models::category::{Category as CategoryRow, CategoryList};

/// Multipart body of `POST /categories/admin/categories`.
pub fn category_form(category: &NewCategory) -> MultipartBody {
    MultipartBody::new()
        .text("name", category.name.as_str())
        .text("description", category.description.clone().unwrap_or_default())
        .image("image", category.image.clone())
}

#[async_trait]
impl CategoryReader for HttpGateway {
    async fn list_categories(&self) -> GatewayResult<Vec<Category>> {
        let list: CategoryList = self.get("categories/").await?;
        list.into_rows()
            .into_iter()
            .map(|row| {
                Category::try_from(row)
                    .map_err(|e| GatewayError::InvalidResponse(format!("category: {e}")))
            })
            .collect()
    }
}

#[async_trait]
impl CategoryWriter for HttpGateway {
    async fn create_category(&self, category: &NewCategory) -> GatewayResult<Option<Category>> {
        let row: Option<CategoryRow> = self
            .send_multipart(
                Method::POST,
                "categories/admin/categories",
                category_form(category),
            )
            .await
            .or_else(|err| match err {
                // The response body is informational; a success without a
                // decodable category still counts.
                GatewayError::Serialization(_) => Ok(None),
                other => Err(other),
            })?;
        Ok(row.and_then(|row| Category::try_from(row).ok()))
    }
}
