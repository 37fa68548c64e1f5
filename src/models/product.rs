use serde::Deserialize;

use crate::domain::product::Product as DomainProduct;
use crate::domain::types::{CategoryId, ProductId, ProductStatus, ProductTitle, TypeConstraintError};
use crate::models::variant::Variant;
use crate::models::wire::WireNumber;

/// Product row of the list, detail and mutation responses.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: WireNumber,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<WireNumber>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "imageurl", alias = "image")]
    pub image_url: Option<String>,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(row: Product) -> Result<Self, Self::Error> {
        let category_id = row
            .category_id
            .map(|id| id.as_i32().and_then(CategoryId::new))
            .transpose()?;
        let status = match row.status.as_deref() {
            Some(status) if !status.trim().is_empty() => status.parse()?,
            _ => ProductStatus::Active,
        };

        Ok(Self {
            id: ProductId::new(row.id.as_i32()?)?,
            title: ProductTitle::new(row.title)?,
            description: row.description.unwrap_or_default(),
            category_id,
            status,
            image_url: row.image_url,
        })
    }
}

/// `GET /products/` body.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default, rename = "totalPages")]
    pub total_pages: Option<u32>,
}

/// `GET /products/{id}` body; only the embedded variants are used.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDetail {
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// `{product: {...}}` answered by create and update.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductEnvelope {
    #[serde(default)]
    pub product: Option<Product>,
}
