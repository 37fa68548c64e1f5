use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::product::Product;
use crate::domain::types::ProductStatus;
use crate::dto::listing::ListPage;

/// Product plus the derived columns of the products table.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRow {
    pub product: Product,
    pub description_preview: String,
    pub category_name: Option<String>,
}

impl ProductRow {
    pub fn new(product: Product, categories: &[Category]) -> Self {
        let category_name = product.category_id.and_then(|id| {
            categories
                .iter()
                .find(|category| category.id == id)
                .map(|category| category.name.to_string())
        });
        Self {
            description_preview: product.description_preview(),
            category_name,
            product,
        }
    }
}

/// Data required to render the products template.
#[derive(Debug, Clone, Serialize)]
pub struct ProductsPageData {
    pub products: ListPage<ProductRow>,
    pub categories: Vec<Category>,
    pub statuses: &'static [ProductStatus],
}
