use serde::{Deserialize, Serialize};

use crate::domain::types::{Amount, ProductId, SizeLabel, VariantId, VariantName};
use crate::domain::upload::ImageUpload;

/// One purchasable row of a product: a variant in a given size.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Variant {
    pub id: VariantId,
    pub product_id: ProductId,
    pub name: VariantName,
    pub description: String,
    pub size: Option<String>,
    pub stock: u32,
    pub price: Amount,
    pub images: Vec<String>,
    pub is_best_selling: bool,
    /// Per-size stock and price, when the backend reports them.
    pub size_options: Vec<SizeOption>,
}

impl Variant {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Size, stock and price triple submitted as the `size_options` JSON field.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SizeOption {
    pub size: SizeLabel,
    pub stock: u32,
    pub price: Amount,
}

/// Payload for `POST /variants/admin/variants`.
#[derive(Clone, Debug)]
pub struct NewVariant {
    pub product_id: ProductId,
    pub name: VariantName,
    pub description: String,
    pub size_options: Vec<SizeOption>,
    pub is_best_selling: bool,
    pub images: Vec<ImageUpload>,
}

/// Payload for `PUT /variants/admin/variants/{id}`.
#[derive(Clone, Debug)]
pub struct UpdateVariant {
    pub name: VariantName,
    pub description: String,
    pub size_options: Vec<SizeOption>,
    pub is_best_selling: bool,
    /// Already uploaded image URLs that should be kept.
    pub existing_images: Vec<String>,
    pub images: Vec<ImageUpload>,
}
