use serde::Serialize;

use crate::domain::types::ProductId;
use crate::domain::variant::Variant;
use crate::dto::listing::ListPage;

#[derive(Debug, Clone, Serialize)]
pub struct VariantRow {
    pub variant: Variant,
    /// `None` when the product is missing from the product list.
    pub product_title: Option<String>,
}

/// One entry of the product filter select.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductOption {
    pub id: ProductId,
    pub title: Option<String>,
}

/// Data required to render the variants template.
#[derive(Debug, Clone, Serialize)]
pub struct VariantsPageData {
    pub variants: ListPage<VariantRow>,
    /// Product the page is scoped to (`/products/{id}/variants`).
    pub product_id: Option<ProductId>,
    pub product_title: Option<String>,
    /// Products offered by the filter select, by id.
    pub products: Vec<ProductOption>,
}
