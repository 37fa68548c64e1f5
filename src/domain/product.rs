use serde::Serialize;

use crate::domain::types::{CategoryId, ProductId, ProductStatus, ProductTitle};
use crate::domain::upload::ImageUpload;

/// Number of characters of a description shown in list tables.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 20;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: ProductTitle,
    pub description: String,
    pub category_id: Option<CategoryId>,
    pub status: ProductStatus,
    pub image_url: Option<String>,
}

impl Product {
    /// Description cut down for table cells.
    pub fn description_preview(&self) -> String {
        truncate_text(&self.description, DESCRIPTION_PREVIEW_CHARS)
    }
}

/// Cuts `text` to `max_chars` characters, appending `...` when shortened.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let mut truncated: String = text.chars().take(max_chars).collect();
        truncated.push_str("...");
        truncated
    } else {
        text.to_string()
    }
}

/// Payload for `POST /products/admin/products`.
#[derive(Clone, Debug)]
pub struct NewProduct {
    pub title: ProductTitle,
    pub description: String,
    pub category_id: CategoryId,
    pub image: ImageUpload,
}

/// What happens to the main image of an edited product.
#[derive(Clone, Debug)]
pub enum ImageChange {
    /// Keep the image already stored upstream, if any.
    Keep(Option<String>),
    /// Upload a replacement.
    Replace(ImageUpload),
}

/// Payload for `PUT /products/admin/products/{id}`.
#[derive(Clone, Debug)]
pub struct UpdateProduct {
    pub title: ProductTitle,
    pub description: String,
    pub category_id: CategoryId,
    pub status: ProductStatus,
    pub image: ImageChange,
}
